use anyhow::{Context, Result, bail};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use newsdesk_config::Config;
use newsdesk_engine::{ArticleEntry, RenderContext, io, render_article};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use relative_path::RelativePathBuf;
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

struct App {
    articles_path: PathBuf,
    ctx: RenderContext,
    entries: Vec<ArticleEntry>,
    list_state: ListState,
    current_content: Vec<String>,
}

impl App {
    fn new(articles_path: PathBuf, ctx: RenderContext) -> Result<Self> {
        let index = io::build_article_index(&articles_path)?;
        let entries = index.entries().cloned().collect::<Vec<_>>();

        let mut app = Self {
            articles_path,
            ctx,
            entries,
            list_state: ListState::default(),
            current_content: Vec::new(),
        };

        if !app.entries.is_empty() {
            app.list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_article(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.entries.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_article(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.entries.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        let Some(entry) = self
            .list_state
            .selected()
            .and_then(|index| self.entries.get(index))
        else {
            self.current_content.clear();
            return;
        };

        self.current_content =
            match io::read_article(entry.file.relative_path(), &self.articles_path) {
                Ok(article) => {
                    let mut lines = vec![article.title.clone(), String::new()];
                    lines.extend(render_article(&article, &self.ctx).text_lines());
                    lines
                }
                Err(e) => vec![format!("Error loading article: {e}")],
            };
    }
}

fn render_context(config: Option<&Config>) -> RenderContext {
    config
        .map(|c| RenderContext::new(c.article_path_prefix.as_str()))
        .unwrap_or_default()
}

/// Print the HTML for a single article file
fn render_file(file: &Path) -> Result<()> {
    let config = Config::load().ok().flatten();
    let root = file.parent().unwrap_or_else(|| Path::new("."));
    let name = file
        .file_name()
        .with_context(|| format!("'{}' is not a file", file.display()))?;
    let relative = RelativePathBuf::from_path(name)?;

    let article = io::read_article(&relative, root)?;
    println!(
        "{}",
        render_article(&article, &render_context(config.as_ref())).to_html()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();

    if args.get(1).map(String::as_str) == Some("render") {
        let Some(file) = args.get(2) else {
            eprintln!("Usage: {} render <article-file>", args[0]);
            process::exit(1);
        };
        return render_file(Path::new(file));
    }

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if args.len() == 2 => {
            log::warn!("Ignoring config file: {e}");
            None
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} <articles-folder-path>", args[0]);
            process::exit(1);
        }
    };

    let (articles_path, from_config) = match (args.len(), &config) {
        (2, _) => (PathBuf::from(&args[1]), false),
        (1, Some(config)) => (config.articles_path.clone(), true),
        (1, None) => {
            eprintln!("Error: No articles path provided and no config file found");
            eprintln!("Usage: {} <articles-folder-path>", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {} [articles-folder-path]", args[0]);
            eprintln!("       {} render <article-file>", args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_articles_dir(&articles_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Articles path '{}'{} is invalid: {e}",
            articles_path.display(),
            source
        );
        process::exit(1);
    }

    let mut app = App::new(articles_path, render_context(config.as_ref()))?;
    if app.entries.is_empty() {
        bail!("No article files found in {}", app.articles_path.display());
    }

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_article(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_article(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    let items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|entry| ListItem::new(vec![Line::from(vec![Span::raw(entry.title.clone())])]))
        .collect();

    let articles_list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Articles"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(articles_list, chunks[0], &mut app.list_state);

    let content_text = if app.current_content.is_empty() {
        vec![Line::from("This article has no content")]
    } else {
        app.current_content
            .iter()
            .map(|line| Line::from(vec![Span::raw(line.clone())]))
            .collect()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Preview"))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(vec![Line::from(vec![
        Span::raw("q/Esc: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ])]);

    f.render_widget(help, rows[1]);
}
