//! termplot - An interactive terminal line/point plotter.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use termplot::app::App;
use termplot::data::{demo_series, DataReader};
use termplot::plot::{Bound, Plot, PlotOption, Series, SeriesStyle, ViewBounds};
use termplot::shared::Shared;
use termplot::ui;
use termplot::util::parse_size;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "termplot")]
#[command(about = "An interactive terminal line/point plotter", long_about = None)]
struct Args {
    /// Data file: first column is x, every further column is a y series
    file: Option<PathBuf>,

    /// Draw style for series loaded from the file (point or block)
    #[arg(long, default_value = "point")]
    style: SeriesStyle,

    /// Initial left edge of the view
    #[arg(long, allow_hyphen_values = true)]
    xmin: Option<f64>,

    /// Initial right edge of the view
    #[arg(long, allow_hyphen_values = true)]
    xmax: Option<f64>,

    /// Initial bottom edge of the view
    #[arg(long, allow_hyphen_values = true)]
    ymin: Option<f64>,

    /// Initial top edge of the view
    #[arg(long, allow_hyphen_values = true)]
    ymax: Option<f64>,

    /// Render once at WIDTHxHEIGHT to stdout instead of running interactively
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    print: Option<(u16, u16)>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting termplot");
    }

    // Validate path if provided
    if let Some(ref path) = args.file {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    let series = load_series(&args)?;
    let bounds = ViewBounds::new();
    bounds.xmin.set(Bound::from(args.xmin));
    bounds.xmax.set(Bound::from(args.xmax));
    bounds.ymin.set(Bound::from(args.ymin));
    bounds.ymax.set(Bound::from(args.ymax));

    if let Some((width, height)) = args.print {
        let mut plot = Plot::new(PlotOption::new(Shared::new(series), &bounds));
        write_lines(io::stdout().lock(), &plot.render_lines(width, height))?;
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(series, bounds);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("termplot exited");
    }

    Ok(())
}

fn load_series(args: &Args) -> Result<Vec<Series>> {
    match &args.file {
        Some(path) => Ok(DataReader::read_file(path, args.style)?),
        None => Ok(demo_series()),
    }
}

/// Write rendered rows without trailing blanks. A closed reader ends output quietly.
fn write_lines<W: Write>(mut out: W, lines: &[String]) -> io::Result<()> {
    let result = lines
        .iter()
        .try_for_each(|line| writeln!(out, "{}", line.trim_end()))
        .and_then(|()| out.flush());
    match result {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.sync_inputs();
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        if app.handle_event(&event::read()?) {
            return Ok(());
        }
    }
}
