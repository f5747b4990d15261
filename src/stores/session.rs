//! Login state against the fixed admin list.
//!
//! Credentials are compared as plain strings. There is no lockout and no
//! distinction between an unknown user and a wrong password.

use crate::model::Admin;

#[derive(Debug, Default)]
pub struct Session {
    admins: Vec<Admin>,
    current: Option<Admin>,
}

impl Session {
    pub fn new(admins: Vec<Admin>) -> Self {
        Self {
            admins,
            current: None,
        }
    }

    /// Signs in the admin whose username and password both match exactly.
    /// On failure the current session, if any, is left as it was.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        match self
            .admins
            .iter()
            .find(|admin| admin.username == username && admin.password == password)
        {
            Some(admin) => {
                self.current = Some(admin.clone());
                true
            }
            None => false,
        }
    }

    pub fn logout(&mut self) {
        self.current = None;
    }

    pub fn current_admin(&self) -> Option<&Admin> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(vec![
            Admin {
                id: "1".into(),
                username: "admin".into(),
                password: "admin123".into(),
                name: "Admin User".into(),
            },
            Admin {
                id: "2".into(),
                username: "manager".into(),
                password: "manager123".into(),
                name: "Manager".into(),
            },
        ])
    }

    #[test]
    fn test_login_success() {
        let mut s = session();
        assert!(s.login("manager", "manager123"));
        assert_eq!(s.current_admin().unwrap().name, "Manager");
        assert!(s.is_authenticated());
    }

    #[test]
    fn test_login_is_case_sensitive() {
        let mut s = session();
        assert!(!s.login("Admin", "admin123"));
        assert!(s.current_admin().is_none());
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let mut s = session();
        assert!(s.login("admin", "admin123"));
        assert!(!s.login("manager", "wrong"));
        assert_eq!(s.current_admin().unwrap().username, "admin");
    }

    #[test]
    fn test_cross_matched_credentials_fail() {
        let mut s = session();
        // Password of another admin
        assert!(!s.login("admin", "manager123"));
    }

    #[test]
    fn test_logout_is_unconditional() {
        let mut s = session();
        s.logout();
        assert!(!s.is_authenticated());
        s.login("admin", "admin123");
        s.logout();
        assert!(s.current_admin().is_none());
    }
}
