use crossterm::event::KeyCode;

/// A key bound to an action on some target.
pub struct Command<T> {
    key: KeyCode,
    description: String,
    action: Box<dyn Fn(&mut T)>,
}

impl<T> Command<T> {
    pub fn key(&self) -> KeyCode {
        self.key
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn execute(&self, target: &mut T) {
        (self.action)(target);
    }
}

/// Ordered set of key bindings. Registration order is the order shown in
/// the controls help.
pub struct CommandRegistry<T> {
    commands: Vec<Command<T>>,
}

impl<T> CommandRegistry<T> {
    pub fn new() -> Self {
        CommandRegistry {
            commands: Vec::new(),
        }
    }

    /// Bind `key` to `action`, replacing any earlier binding for that key.
    pub fn add_command<F>(&mut self, key: KeyCode, description: impl Into<String>, action: F)
    where
        F: Fn(&mut T) + 'static,
    {
        let command = Command {
            key,
            description: description.into(),
            action: Box::new(action),
        };
        match self.commands.iter_mut().find(|c| c.key == key) {
            Some(existing) => *existing = command,
            None => self.commands.push(command),
        }
    }

    /// Run the action bound to `key`. Returns whether a binding existed.
    pub fn dispatch(&self, key: KeyCode, target: &mut T) -> bool {
        match self.commands.iter().find(|c| c.key == key) {
            Some(command) => {
                tracing::trace!(key = %key_label(key), "dispatching command");
                command.execute(target);
                true
            }
            None => false,
        }
    }

    /// `(key label, description)` pairs in registration order.
    pub fn descriptions(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.commands
            .iter()
            .map(|c| (key_label(c.key), c.description.clone()))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<T> Default for CommandRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Short human-readable name for a key.
pub fn key_label(key: KeyCode) -> String {
    match key {
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_runs_bound_action() {
        let mut registry = CommandRegistry::new();
        registry.add_command(KeyCode::Right, "increment", |n: &mut i32| *n += 1);
        registry.add_command(KeyCode::Left, "decrement", |n: &mut i32| *n -= 1);

        let mut value = 0;
        assert!(registry.dispatch(KeyCode::Right, &mut value));
        assert!(registry.dispatch(KeyCode::Right, &mut value));
        assert!(registry.dispatch(KeyCode::Left, &mut value));
        assert_eq!(value, 1);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let registry: CommandRegistry<i32> = CommandRegistry::new();
        let mut value = 7;
        assert!(!registry.dispatch(KeyCode::Char('z'), &mut value));
        assert_eq!(value, 7);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_rebinding_replaces_action() {
        let mut registry = CommandRegistry::new();
        registry.add_command(KeyCode::Enter, "first", |n: &mut i32| *n = 1);
        registry.add_command(KeyCode::Enter, "second", |n: &mut i32| *n = 2);

        let mut value = 0;
        registry.dispatch(KeyCode::Enter, &mut value);
        assert_eq!(value, 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_descriptions_keep_registration_order() {
        let mut registry = CommandRegistry::new();
        registry.add_command(KeyCode::Left, "move left", |_: &mut ()| {});
        registry.add_command(KeyCode::Enter, "drop", |_: &mut ()| {});
        registry.add_command(KeyCode::Char('q'), "quit", |_: &mut ()| {});

        let descriptions: Vec<_> = registry.descriptions().collect();
        assert_eq!(
            descriptions,
            vec![
                ("←".to_string(), "move left".to_string()),
                ("Enter".to_string(), "drop".to_string()),
                ("q".to_string(), "quit".to_string()),
            ]
        );
    }
}
