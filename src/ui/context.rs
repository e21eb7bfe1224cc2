use super::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8) -> Self {
        Self::from_caps(json, verbose, detect_capabilities())
    }

    pub(crate) fn from_caps(json: bool, verbose: u8, caps: TerminalCapabilities) -> Self {
        let color = !json && caps.supports_color && !caps.is_ci;
        let unicode = caps.supports_unicode;
        Self {
            json,
            verbose,
            caps,
            color,
            unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci: true,
            width: 120,
            height: 40,
        }
    }

    #[test]
    fn ci_defaults_to_no_color() {
        let ui = UiContext::from_caps(false, 0, ci_caps());
        assert!(!ui.color);
    }

    #[test]
    fn json_mode_disables_color() {
        let mut caps = ci_caps();
        caps.is_ci = false;
        let ui = UiContext::from_caps(true, 0, caps);
        assert!(!ui.color);
    }
}
