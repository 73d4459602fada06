/// Which part of the form currently receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Input,
    Select,
    Command,
    Help,
    Quit,
}

impl AppMode {
    pub fn label(self) -> &'static str {
        match self {
            AppMode::Input => " INPUT ",
            AppMode::Select => " FIELDS ",
            AppMode::Command => " COMMAND ",
            AppMode::Help => " HELP ",
            AppMode::Quit => " QUIT ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels_are_padded() {
        for mode in [
            AppMode::Input,
            AppMode::Select,
            AppMode::Command,
            AppMode::Help,
            AppMode::Quit,
        ] {
            let label = mode.label();
            assert!(label.starts_with(' ') && label.ends_with(' '));
        }
    }
}
