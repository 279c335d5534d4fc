//! Color decoration for printed trees.
//!
//! The active [`Palette`] is process-wide and starts out as the identity
//! palette. [`try_init_colors`] swaps in a terminal palette when the
//! environment allows it; printing never waits for that to happen and simply
//! uses whichever palette is installed when it starts.

mod parsing;

pub use parsing::HexColor;

use crate::config::ColorSettings;
use lazy_static::lazy_static;
use owo_colors::OwoColorize;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Decorates a piece of text
pub type ColorFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ColorError {
    #[error("color output disabled by {0}")]
    Disabled(&'static str),
    #[error("stdout is not a terminal")]
    NotATerminal,
    #[error("terminal `{0}` cannot display colors")]
    DumbTerminal(String),
    #[error("invalid color identifier `{0}`")]
    InvalidColor(String),
}

/// The parts of a printed tree that get their own color
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ColorRole {
    TagName,
    AttributeName,
    AttributeValue,
}

impl ColorRole {
    pub fn hex(&self) -> &'static str {
        match self {
            ColorRole::TagName => "#569CD6",
            ColorRole::AttributeName => "#9CDCFE",
            ColorRole::AttributeValue => "#CE9178",
        }
    }
}

/// Something able to turn a color identifier into a text decorator
pub trait ColorBackend {
    fn hex(&self, color: &str) -> Result<ColorFn, ColorError>;
}

/// 24-bit ANSI escapes, for terminals
#[derive(Debug, Clone, Copy)]
pub struct TerminalBackend(());

impl TerminalBackend {
    /// Only succeeds when `settings` say the output can show colors
    pub fn detect(settings: &ColorSettings) -> Result<Self, ColorError> {
        settings.check()?;
        Ok(Self(()))
    }
}

impl ColorBackend for TerminalBackend {
    fn hex(&self, color: &str) -> Result<ColorFn, ColorError> {
        let HexColor { r, g, b } = color.parse()?;
        Ok(Arc::new(move |text: &str| text.truecolor(r, g, b).to_string()))
    }
}

/// The three decorators used while printing, always replaced together
#[derive(Clone)]
pub struct Palette {
    tag_name: ColorFn,
    attribute_name: ColorFn,
    attribute_value: ColorFn,
    colored: bool,
}

impl Palette {
    /// Passes all text through untouched
    pub fn plain() -> Self {
        let identity: ColorFn = Arc::new(|text: &str| text.to_string());
        Self {
            tag_name: identity.clone(),
            attribute_name: identity.clone(),
            attribute_value: identity,
            colored: false,
        }
    }

    pub fn from_backend<B: ColorBackend + ?Sized>(backend: &B) -> Result<Self, ColorError> {
        Ok(Self {
            tag_name: backend.hex(ColorRole::TagName.hex())?,
            attribute_name: backend.hex(ColorRole::AttributeName.hex())?,
            attribute_value: backend.hex(ColorRole::AttributeValue.hex())?,
            colored: true,
        })
    }

    pub fn paint(&self, role: ColorRole, text: &str) -> String {
        match role {
            ColorRole::TagName => (self.tag_name)(text),
            ColorRole::AttributeName => (self.attribute_name)(text),
            ColorRole::AttributeValue => (self.attribute_value)(text),
        }
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("colored", &self.colored)
            .finish_non_exhaustive()
    }
}

lazy_static! {
    static ref ACTIVE_PALETTE: RwLock<Arc<Palette>> = RwLock::new(Arc::new(Palette::plain()));
}

/// Snapshot of the palette currently used by [`print_html`](crate::print_html)
pub fn active_palette() -> Arc<Palette> {
    let guard = ACTIVE_PALETTE
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&*guard)
}

fn install_palette(palette: Palette) {
    let mut guard = ACTIVE_PALETTE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Arc::new(palette);
}

/// Go back to uncolored output
pub fn reset_colors() {
    install_palette(Palette::plain());
}

/// Try to enable colored output for the rest of the process.
///
/// Failure is not an error for the caller: it is logged and the identity
/// palette stays in place. Returns whether colors are now active. Calling this
/// again re-detects and reinstalls.
pub async fn try_init_colors() -> bool {
    let settings = ColorSettings::from_env();
    match TerminalBackend::detect(&settings) {
        Ok(backend) => try_init_colors_with(&backend).await,
        Err(err) => {
            report_degraded(&err);
            false
        }
    }
}

/// Like [`try_init_colors`], with a caller-provided backend
pub async fn try_init_colors_with<B: ColorBackend + ?Sized>(backend: &B) -> bool {
    match Palette::from_backend(backend) {
        Ok(palette) => {
            install_palette(palette);
            debug!("Colored output enabled");
            true
        }
        Err(err) => {
            report_degraded(&err);
            false
        }
    }
}

fn report_degraded(err: &ColorError) {
    info!(
        "Could not enable colored output in the current environment. \
         Printing still works, but output will not be colored."
    );
    warn!(error = %err, "Color backend unavailable");
}
