//! Styled console output and interactive prompts.

use std::io::{self, Write};

use console::Term;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{
    clamp_width, layout, share_width, wrap, Cell, Column, FormatConfig, FormatOptions,
    FALLBACK_WIDTH,
};
use crate::output::level::Level;
use crate::output::palette::Palette;
use crate::output::resources::{BuiltinResources, Resources};
use crate::output::styles::{Renderer, Style, StyleRegistry};
use crate::prompt::{
    yes_no_field, InputSource, PromptResponse, PromptSchema, PromptTheme, Prompter,
    TerminalInput, RESPONSE_KEY,
};

/// Prints styled text blocks and asks the user for input.
///
/// Every print path wraps the text to the configured width, applies the
/// requested style and writes the result, skipping it entirely when it comes
/// out empty. Methods take `&mut self`; the logger does no locking of its own.
pub struct Logger {
    format: FormatConfig,
    palette: Palette,
    styles: StyleRegistry,
    out: Box<dyn Write + Send>,
    resources: Box<dyn Resources>,
    prompter: Prompter,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Logger writing to stdout, sized to the current terminal.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Logger configured from a loaded configuration file.
    pub fn from_config(config: &Config) -> Self {
        Self::builder().config(config).build()
    }

    /// Fetch the logo and print it between blank lines.
    pub async fn print_logo(&mut self) -> Result<()> {
        let logo = self.resources.logo().await?;
        self.make_space(1)?;
        writeln!(self.out, "{}", logo)?;
        self.make_space(1)
    }

    /// Fetch the banner for `title`, print it and underline it with a muted divider.
    pub async fn print_banner(&mut self, title: &str) -> Result<()> {
        let banner = self.resources.banner(title).await?;
        self.make_space(1)?;
        self.print(&banner, FormatOptions::styled("banner").with_trim_start(false))?;
        self.make_divider('*', "muted")
    }

    /// Print `lines` empty lines.
    pub fn make_space(&mut self, lines: usize) -> Result<()> {
        for _ in 0..lines {
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// One line whose content is `fill` repeated across the width.
    pub fn make_divider(&mut self, fill: char, opts: impl Into<FormatOptions>) -> Result<()> {
        let fill = fill.to_string();
        let opts = opts.into().with_filler(fill.clone());
        self.print(&fill, opts)
    }

    /// Formatted text followed by a blank line.
    pub fn message(&mut self, text: &str, opts: impl Into<FormatOptions>) -> Result<()> {
        self.print(text, opts)?;
        self.make_space(1)
    }

    /// Formatted text, with no trailing blank line.
    pub fn print(&mut self, text: &str, opts: impl Into<FormatOptions>) -> Result<()> {
        self.emit(text, &opts.into())
    }

    /// A row of columns followed by a blank line.
    pub fn columns<C>(&mut self, columns: &[C], opts: impl Into<FormatOptions>) -> Result<()>
    where
        C: Clone + Into<Column>,
    {
        let columns: Vec<Column> = columns.iter().cloned().map(Into::into).collect();
        let row = self.format_columns(&columns, &opts.into());
        if !row.is_empty() {
            writeln!(self.out, "{}", row)?;
        }
        self.make_space(1)
    }

    /// Informational status line.
    pub fn status(&mut self, text: &str) -> Result<()> {
        self.status_line(text, Level::Info, Level::Info.symbol())
    }

    /// Status line marking success.
    pub fn success(&mut self, text: &str) -> Result<()> {
        self.status_line(text, Level::Success, Level::Success.symbol())
    }

    /// Status line marking a warning.
    pub fn warning(&mut self, text: &str) -> Result<()> {
        self.status_line(text, Level::Warning, Level::Warning.symbol())
    }

    /// Error line framed by blank lines and empty error-styled lines.
    pub fn error(&mut self, text: &str) -> Result<()> {
        self.make_space(1)?;
        self.status_line("", Level::Error, ' ')?;
        self.status_line(text, Level::Error, Level::Error.symbol())?;
        self.status_line("", Level::Error, ' ')?;
        self.make_space(1)
    }

    fn status_line(&mut self, text: &str, level: Level, symbol: char) -> Result<()> {
        let opts = FormatOptions::styled(level.style_name())
            .with_hanging_indent("    ")
            .with_trim_start(false);
        let opts = FormatOptions {
            padding_left: Some(String::new()),
            ..opts
        };
        self.print(&format!(" {}  {}\n", symbol, text), opts)
    }

    /// Print `text` with a heading style, `level` being 1 to 3.
    pub fn heading(&mut self, level: u8, text: &str) -> Result<()> {
        let style = match level {
            0 | 1 => "h1",
            2 => "h2",
            _ => "h3",
        };
        self.print(text, style)
    }

    /// One bulleted item; continuation lines are indented under the text.
    pub fn bullet(&mut self, text: &str) -> Result<()> {
        self.print(text, "bullet")
    }

    /// Current format configuration.
    pub fn opts(&self) -> &FormatConfig {
        &self.format
    }

    /// Merge `opts` into the configuration.
    ///
    /// Only fields of the configuration are taken; a style is ignored. The
    /// width is clamped to the supported range.
    pub fn set_opts(&mut self, opts: impl Into<FormatOptions>) {
        let opts = opts.into();
        if let Some(style) = &opts.style {
            debug!("Ignoring style '{}' in format options", style);
        }
        self.format = self.format.merged(&opts);
        self.format.width = clamp_width(self.format.width);
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Resolve a style by name, falling back to identity.
    pub fn get_style(&self, name: Option<&str>) -> Style {
        self.styles.get(name)
    }

    /// Registry for adding custom styles.
    pub fn styles_mut(&mut self) -> &mut StyleRegistry {
        &mut self.styles
    }

    /// Wrap and paint `text` without printing it.
    ///
    /// Layout styles print on their own and cannot produce a string; with one
    /// of those the text is returned wrapped but unstyled.
    pub fn format_message(&self, text: &str, opts: &FormatOptions) -> String {
        if text.is_empty() {
            return String::new();
        }
        let wrapped = wrap(text, &self.format.merged(opts));
        self.styles.get(opts.style.as_deref()).apply(&wrapped)
    }

    /// Format every column on its own, then lay them out side by side.
    ///
    /// Columns without a width share whatever the others leave of the row width.
    pub fn format_columns(&self, columns: &[Column], opts: &FormatOptions) -> String {
        let total = opts.width.unwrap_or(self.format.width);
        let reserved: usize = columns.iter().filter_map(|c| c.options.width).sum();
        let automatic = columns.iter().filter(|c| c.options.width.is_none()).count();
        let mut shares = share_width(total.saturating_sub(reserved), automatic).into_iter();

        let cells: Vec<Cell> = columns
            .iter()
            .map(|column| {
                let width = column.options.width.or_else(|| shares.next()).unwrap_or(1);
                let options = column.options.clone().or(opts).with_width(width);
                Cell {
                    content: self.format_message(&column.content, &options),
                    width,
                }
            })
            .collect();
        layout(&cells)
    }

    /// Ask for every field of `schema`. A bare string asks a single question
    /// whose answer is stored under `response`.
    pub async fn prompt(&mut self, schema: impl Into<PromptSchema>) -> Result<PromptResponse> {
        self.out.flush()?;
        self.prompter.ask(schema.into()).await
    }

    /// Ask a yes/no question until the answer is recognized.
    pub async fn prompt_yn(&mut self, message: Option<&str>) -> Result<bool> {
        let field = yes_no_field(message.unwrap_or("Y/N"));
        let response = self.prompt(field).await?;
        response
            .get(RESPONSE_KEY)
            .and_then(|value| value.as_bool())
            .ok_or_else(|| Error::Prompt("no yes/no answer collected".to_string()))
    }

    fn emit(&mut self, text: &str, opts: &FormatOptions) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        match self.styles.get(opts.style.as_deref()) {
            Style::Render(render) => render(self, text),
            style => {
                let formatted = style.apply(&wrap(text, &self.format.merged(opts)));
                if !formatted.is_empty() {
                    writeln!(self.out, "{}", formatted)?;
                }
                Ok(())
            }
        }
    }
}

impl Renderer for Logger {
    fn format(&self) -> &FormatConfig {
        &self.format
    }

    fn render(&mut self, text: &str, opts: &FormatOptions) -> Result<()> {
        self.emit(text, opts)
    }

    fn space(&mut self, lines: usize) -> Result<()> {
        self.make_space(lines)
    }
}

/// Step-by-step construction of a [`Logger`].
#[derive(Default)]
pub struct LoggerBuilder {
    terminal_width: Option<usize>,
    options: FormatOptions,
    palette: Palette,
    theme: PromptTheme,
    out: Option<Box<dyn Write + Send>>,
    resources: Option<Box<dyn Resources>>,
    input: Option<Box<dyn InputSource>>,
}

impl LoggerBuilder {
    /// Lay out for a terminal `columns` wide instead of asking the terminal.
    pub fn terminal_width(mut self, columns: usize) -> Self {
        self.terminal_width = Some(columns);
        self
    }

    /// Format options merged into the initial configuration.
    pub fn options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn theme(mut self, theme: PromptTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Palette, prompt theme and format options from `config`.
    pub fn config(self, config: &Config) -> Self {
        self.palette(config.palette.clone())
            .theme(config.prompt.clone())
            .options(config.format.clone())
    }

    pub fn writer(mut self, out: impl Write + Send + 'static) -> Self {
        self.out = Some(Box::new(out));
        self
    }

    pub fn resources(mut self, resources: impl Resources + 'static) -> Self {
        self.resources = Some(Box::new(resources));
        self
    }

    pub fn input(mut self, input: impl InputSource + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    pub fn build(self) -> Logger {
        let columns = self.terminal_width.unwrap_or_else(detect_terminal_width);
        let out = self.out.unwrap_or_else(|| Box::new(io::stdout()));
        let resources = self.resources.unwrap_or_else(|| Box::new(BuiltinResources));
        let input = self.input.unwrap_or_else(|| Box::new(TerminalInput));

        let mut logger = Logger {
            format: FormatConfig::for_terminal_width(columns),
            styles: StyleRegistry::new(&self.palette),
            palette: self.palette,
            out,
            resources,
            prompter: Prompter::new(self.theme, input),
        };
        logger.set_opts(self.options);
        logger
    }
}

fn detect_terminal_width() -> usize {
    match Term::stdout().size_checked() {
        Some((_rows, columns)) => usize::from(columns),
        None => {
            debug!("Terminal width unknown, assuming {} columns", FALLBACK_WIDTH);
            FALLBACK_WIDTH
        }
    }
}
