use domdump::colors::{ColorBackend, ColorError, ColorFn, TerminalBackend};
use domdump::config::{ColorPolicy, ColorSettings, COLOR_POLICY_VAR};
use domdump::html::DOMNode;
use domdump::{
    active_palette, attributes, print_html, print_html_with, reset_colors, try_init_colors,
    try_init_colors_with, Palette,
};
use lazy_static::lazy_static;
use std::sync::{Arc, Barrier, Mutex, MutexGuard, PoisonError};
use tracing_subscriber::EnvFilter;

lazy_static! {
    // Every test here swaps the process-wide palette
    static ref PALETTE_LOCK: Mutex<()> = Mutex::new(());
}

fn setup() -> MutexGuard<'static, ()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    let guard = PALETTE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    reset_colors();
    guard
}

fn form() -> DOMNode {
    DOMNode::tag(
        "form",
        vec![
            DOMNode::element("input", attributes!("type" => "text"), vec![]),
            DOMNode::tag("button", vec!["Go".into()]),
        ],
    )
}

const PLAIN_FORM: &str = r#"<form>
  <input type="text" />
  <button>
    Go
  </button>
</form>"#;

fn terminal_backend() -> TerminalBackend {
    let settings = ColorSettings {
        policy: ColorPolicy::Always,
        ..Default::default()
    };
    TerminalBackend::detect(&settings).unwrap()
}

/// Drop SGR sequences (`ESC [ ... m`), leaving the text they decorate
fn strip_escapes(colored: &str) -> String {
    let mut plain = String::with_capacity(colored.len());
    let mut chars = colored.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|c| *c == 'm');
        } else {
            plain.push(c);
        }
    }
    plain
}

/// Sets an environment variable until dropped
struct EnvVar(&'static str);

impl EnvVar {
    fn set(name: &'static str, value: &str) -> Self {
        std::env::set_var(name, value);
        Self(name)
    }
}

impl Drop for EnvVar {
    fn drop(&mut self) {
        std::env::remove_var(self.0);
    }
}

struct Unavailable;

impl ColorBackend for Unavailable {
    fn hex(&self, color: &str) -> Result<ColorFn, ColorError> {
        Err(ColorError::InvalidColor(color.to_string()))
    }
}

#[test]
fn uncolored_before_init() {
    let _guard = setup();
    assert!(!active_palette().is_colored());
    assert_eq!(print_html(&form()).unwrap(), PLAIN_FORM);
}

#[tokio::test]
async fn failed_init_keeps_plain_output() {
    let _guard = setup();
    assert!(!try_init_colors_with(&Unavailable).await);
    assert!(!active_palette().is_colored());

    let output = print_html(&form()).unwrap();
    assert_eq!(output, PLAIN_FORM);
    assert!(!output.contains('\x1b'));
}

#[tokio::test]
async fn init_from_environment() {
    let _guard = setup();

    {
        let _policy = EnvVar::set(COLOR_POLICY_VAR, "never");
        assert!(!try_init_colors().await);
        assert_eq!(print_html(&form()).unwrap(), PLAIN_FORM);
    }

    {
        let _policy = EnvVar::set(COLOR_POLICY_VAR, "always");
        assert!(try_init_colors().await);
        // Initializing again is harmless
        assert!(try_init_colors().await);
    }
    let output = print_html(&form()).unwrap();
    assert!(output.contains("\x1b[38;2;86;156;214m"));
    // Color only wraps names and values, the layout is untouched
    assert_eq!(strip_escapes(&output), PLAIN_FORM);

    reset_colors();
    assert_eq!(print_html(&form()).unwrap(), PLAIN_FORM);
}

#[test]
fn strip_escapes_keeps_text() {
    assert_eq!(strip_escapes("<\x1b[38;2;1;2;3mdiv\x1b[39m>"), "<div>");
    assert_eq!(strip_escapes(PLAIN_FORM), PLAIN_FORM);
}

#[test]
fn printing_during_init_never_mixes_palettes() {
    let _guard = setup();
    let node = form();
    let colored = Palette::from_backend(&terminal_backend()).unwrap();
    let colored_form = print_html_with(&node, 0, &colored).unwrap();

    const READERS: usize = 4;
    let started = Arc::new(Barrier::new(READERS + 1));
    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let node = node.clone();
            let colored_form = colored_form.clone();
            let started = Arc::clone(&started);
            std::thread::spawn(move || {
                // Nothing is installed until every reader has printed once
                assert_eq!(print_html(&node).unwrap(), PLAIN_FORM);
                started.wait();
                // Keep printing across the swap until the new palette shows up
                let mut printed = 0;
                loop {
                    let output = print_html(&node).unwrap();
                    printed += 1;
                    if output == colored_form {
                        return printed;
                    }
                    assert_eq!(output, PLAIN_FORM);
                }
            })
        })
        .collect();

    started.wait();
    let backend = terminal_backend();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    assert!(runtime.block_on(try_init_colors_with(&backend)));

    for reader in readers {
        assert!(reader.join().unwrap() >= 1);
    }
    reset_colors();
}

#[tokio::test]
async fn snapshot_is_unaffected_by_reset() {
    let _guard = setup();
    assert!(try_init_colors_with(&terminal_backend()).await);
    let snapshot = active_palette();
    reset_colors();

    assert!(snapshot.is_colored());
    assert!(!active_palette().is_colored());
    assert_ne!(print_html_with(&form(), 0, &snapshot).unwrap(), PLAIN_FORM);
    assert_eq!(print_html(&form()).unwrap(), PLAIN_FORM);
}
