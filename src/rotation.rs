//! Rotating role text in the hero

use std::time::Duration;

/// Time each role stays on screen
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRotator<'a> {
    roles: &'a [String],
    index: usize,
}

impl<'a> RoleRotator<'a> {
    pub fn new(roles: &'a [String]) -> Self {
        Self { roles, index: 0 }
    }

    pub fn current(&self) -> Option<&'a str> {
        self.roles.get(self.index).map(String::as_str)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next role, wrapping around
    pub fn advance(&mut self) -> Option<&'a str> {
        if self.roles.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.roles.len();
        self.current()
    }

    /// Role on screen `elapsed` after mount
    pub fn at(&self, elapsed: Duration) -> Option<&'a str> {
        if self.roles.is_empty() {
            return None;
        }
        let ticks = (elapsed.as_millis() / ROTATION_INTERVAL.as_millis()) as usize;
        self.roles.get(ticks % self.roles.len()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> Vec<String> {
        vec!["Engineer".into(), "Designer".into(), "Writer".into()]
    }

    #[test]
    fn test_advance_wraps() {
        let roles = roles();
        let mut rotator = RoleRotator::new(&roles);
        assert_eq!(rotator.current(), Some("Engineer"));
        assert_eq!(rotator.advance(), Some("Designer"));
        assert_eq!(rotator.advance(), Some("Writer"));
        assert_eq!(rotator.advance(), Some("Engineer"));
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn test_at_elapsed() {
        let roles = roles();
        let rotator = RoleRotator::new(&roles);
        assert_eq!(rotator.at(Duration::from_millis(2999)), Some("Engineer"));
        assert_eq!(rotator.at(Duration::from_millis(3000)), Some("Designer"));
        assert_eq!(rotator.at(Duration::from_millis(9000)), Some("Engineer"));
    }

    #[test]
    fn test_empty_roles() {
        let roles: Vec<String> = Vec::new();
        let mut rotator = RoleRotator::new(&roles);
        assert_eq!(rotator.current(), None);
        assert_eq!(rotator.advance(), None);
        assert_eq!(rotator.at(Duration::from_secs(10)), None);
    }
}
