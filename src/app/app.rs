use super::form::FormState;
use super::input_buffer::InputBuffer;
use super::mode::AppMode;
use super::toast::{Toast, ToastKind};
use super::{AppEvent, RenderState};
use crate::engine::{Classifier, Config};
use crate::input::{self, LoadedInput, LoadError, Request};
use crate::ui::command::{command_to_app_event, parse_command};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};
use tracing::{info, warn};

pub struct App {
    pub mode: AppMode,
    pub input: InputBuffer,
    pub command: InputBuffer,
    pub form: FormState,
    classifier: Classifier,
    toast: Option<Toast>,
    toast_duration: Duration,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            mode: AppMode::Input,
            input: InputBuffer::new(),
            command: InputBuffer::new(),
            form: FormState::new(&config.ui.default_fields),
            classifier: Classifier::new(config.identity.clone()),
            toast: None,
            toast_duration: Duration::from_millis(config.ui.toast_duration_ms()),
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Submit => self.submit(now),
            AppEvent::Clear => {
                self.input.clear();
                self.form.last_result = None;
                self.mode = AppMode::Input;
            }
            AppEvent::LoadFile(path) => {
                let loaded = input::file::load(&path);
                self.apply_loaded(loaded, now);
            }
            AppEvent::LoadClipboard => {
                let loaded = input::clipboard::load();
                self.apply_loaded(loaded, now);
            }
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.mode = AppMode::Help,
            AppEvent::InvalidCommand(command) => {
                self.mode = AppMode::Input;
                self.notify(
                    ToastKind::Warning,
                    format!("Unknown command: '{command}' (:h for help)"),
                    now,
                );
            }
        }
    }

    /// Parse the input box, classify it, and replace the displayed result.
    pub fn submit(&mut self, now: Instant) {
        self.mode = AppMode::Input;
        match Request::parse(self.input.text()) {
            Ok(request) => {
                let result = self.classifier.classify(&request.data);
                info!(
                    tokens = request.data.len(),
                    numbers = result.numbers.len(),
                    alphabets = result.alphabets.len(),
                    "Submission classified"
                );
                self.form.last_result = Some(result);
                self.notify(ToastKind::Success, "Classification complete", now);
            }
            Err(err) => {
                warn!("Submission rejected: {err}");
                self.form.last_result = None;
                self.notify(ToastKind::Error, err.to_string(), now);
            }
        }
    }

    fn apply_loaded(&mut self, loaded: Result<LoadedInput, LoadError>, now: Instant) {
        self.mode = AppMode::Input;
        match loaded {
            Ok(loaded) => {
                self.input.set_text(loaded.text);
                self.notify(ToastKind::Info, format!("Loaded {}", loaded.source), now);
            }
            Err(err) => {
                warn!("Load failed: {err}");
                self.notify(ToastKind::Error, err.to_string(), now);
            }
        }
    }

    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.toast = Some(Toast::new(kind, message, now, self.toast_duration));
    }

    /// Drop the toast once its time is up.
    pub fn tick(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.mode = AppMode::Quit;
            return;
        }

        match self.mode {
            AppMode::Input => self.handle_input_key(key, now),
            AppMode::Select => self.handle_select_key(key, now),
            AppMode::Command => self.handle_command_key(key, now),
            AppMode::Help => self.mode = AppMode::Input,
            AppMode::Quit => {}
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        match self.mode {
            AppMode::Input => self.input.insert_str(text),
            AppMode::Command => self.command.insert_str(text),
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Enter => self.submit(now),
            KeyCode::Tab => self.mode = AppMode::Select,
            KeyCode::Esc => {
                self.command.clear();
                self.mode = AppMode::Command;
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.insert_char(c)
            }
            _ => {}
        }
    }

    fn handle_select_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.form.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.form.move_down(),
            KeyCode::Char(' ') => self.form.toggle_highlighted(),
            KeyCode::Enter => self.submit(now),
            KeyCode::Tab | KeyCode::Esc => self.mode = AppMode::Input,
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Enter => {
                let event = command_to_app_event(parse_command(self.command.text()));
                self.command.clear();
                self.handle_event(event, now);
            }
            KeyCode::Esc => {
                self.command.clear();
                self.mode = AppMode::Input;
            }
            KeyCode::Backspace => self.command.backspace(),
            KeyCode::Left => self.command.move_left(),
            KeyCode::Right => self.command.move_right(),
            KeyCode::Char(c) => self.command.insert_char(c),
            _ => {}
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let mut state = RenderState::empty(self.mode);
        state.input = self.input.text().to_string();
        state.input_cursor = self.input.cursor_column();
        state.command = self.command.text().to_string();
        state.command_cursor = self.command.cursor_column();
        state.fields = crate::engine::Field::ALL
            .iter()
            .map(|&field| (field, self.form.is_selected(field)))
            .collect();
        state.field_cursor = self.form.cursor;
        state.output = self
            .form
            .filtered()
            .and_then(|partial| serde_json::to_string_pretty(&partial).ok());
        state.toast = self
            .toast
            .as_ref()
            .map(|toast| (toast.kind, toast.message.clone()));
        state
    }
}
