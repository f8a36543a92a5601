//! Per-client session state.
//!
//! A `Session` belongs to exactly one UI client and is passed to every
//! tracker operation. It starts anonymous and holds the logged-in user's
//! profile and daily goal after a successful login.

use chrono::NaiveDate;

use crate::accounts::Account;
use crate::metrics::body;

/// Profile of the logged-in user, kept in sync with the stored account.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub is_admin: bool,
    pub dob: NaiveDate,
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl SessionUser {
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        body::age_on(self.dob, today)
    }

    pub fn bmi(&self) -> f64 {
        body::bmi(self.weight_kg, self.height_cm)
    }
}

impl From<&Account> for SessionUser {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            is_admin: account.is_admin,
            dob: account.dob,
            height_cm: account.height_cm,
            weight_kg: account.weight_kg,
        }
    }
}

/// Authentication state and preferences of one client.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<SessionUser>,
    daily_goal: Option<u32>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub(crate) fn user_mut(&mut self) -> Option<&mut SessionUser> {
        self.user.as_mut()
    }

    /// Replace the session contents with a freshly authenticated account.
    pub fn login(&mut self, account: &Account) {
        self.user = Some(SessionUser::from(account));
        self.daily_goal = None;
    }

    /// Clear every session key.
    pub fn logout(&mut self) {
        self.user = None;
        self.daily_goal = None;
    }

    /// Goal saved during this session, if any.
    pub fn daily_goal(&self) -> Option<u32> {
        self.daily_goal
    }

    pub(crate) fn set_daily_goal(&mut self, kcal: u32) {
        self.daily_goal = Some(kcal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn account() -> Account {
        Account {
            id: 7,
            username: "alice".to_string(),
            password_hash: String::new(),
            dob: NaiveDate::from_ymd_opt(1995, 5, 1).unwrap(),
            height_cm: 165.0,
            weight_kg: 60.0,
            is_admin: false,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_new_session_is_anonymous() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert_eq!(session.daily_goal(), None);
    }

    #[test]
    fn test_login_populates_profile() {
        let mut session = Session::new();
        session.login(&account());

        let user = session.user().unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "alice");
        assert!(!user.is_admin);
        assert_eq!(user.age_on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()), 29);
        assert!((user.bmi() - 22.04).abs() < 0.01);
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut session = Session::new();
        session.login(&account());
        session.set_daily_goal(800);

        session.logout();

        assert!(!session.is_authenticated());
        assert_eq!(session.daily_goal(), None);
    }

    #[test]
    fn test_relogin_resets_goal() {
        let mut session = Session::new();
        session.login(&account());
        session.set_daily_goal(1200);

        session.login(&account());
        assert_eq!(session.daily_goal(), None);
    }
}
