//! In-memory account directory backing the mock sign-in / sign-up flow.
//!
//! Seeded with a single demo account. Passwords are compared in plain text;
//! this is a stand-in for a real identity provider, not a security boundary.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::anyhow;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_NAME: &str = "Demo User";

struct Account {
    user: User,
    password: String,
}

/// Accounts keyed by lowercased email.
pub struct UserDirectory {
    accounts: RwLock<HashMap<String, Account>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// A directory containing only the demo account.
    pub fn with_demo_account() -> Self {
        let directory = Self::new();
        let demo = Account {
            user: User {
                id: Uuid::new_v4(),
                name: DEMO_NAME.to_string(),
                email: DEMO_EMAIL.to_string(),
                profile_completed: true,
                created_at: Utc::now(),
            },
            password: DEMO_PASSWORD.to_string(),
        };
        if let Ok(mut accounts) = directory.accounts.write() {
            accounts.insert(DEMO_EMAIL.to_string(), demo);
        }
        directory
    }

    /// Returns the user when email and password match a registered account.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<Option<User>, AppError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| anyhow!("user directory lock poisoned"))?;

        Ok(accounts
            .get(&normalize_email(email))
            .filter(|account| account.password == password)
            .map(|account| account.user.clone()))
    }

    /// Registers a new account. Fails with `Conflict` when the email is taken.
    pub fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, AppError> {
        let email = normalize_email(email);
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::Validation("A valid email is required".to_string()));
        }
        if password.is_empty() {
            return Err(AppError::Validation("Password cannot be empty".to_string()));
        }

        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| anyhow!("user directory lock poisoned"))?;

        if accounts.contains_key(&email) {
            return Err(AppError::Conflict(format!(
                "An account already exists for {email}"
            )));
        }

        let name = match name.trim() {
            "" => email.split('@').next().unwrap_or_default().to_string(),
            trimmed => trimmed.to_string(),
        };

        let user = User {
            id: Uuid::new_v4(),
            name,
            email: email.clone(),
            profile_completed: false,
            created_at: Utc::now(),
        };
        accounts.insert(
            email,
            Account {
                user: user.clone(),
                password: password.to_string(),
            },
        );
        Ok(user)
    }

    pub fn get(&self, user_id: Uuid) -> Result<Option<User>, AppError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| anyhow!("user directory lock poisoned"))?;

        Ok(accounts
            .values()
            .find(|account| account.user.id == user_id)
            .map(|account| account.user.clone()))
    }

    /// Sets the display name and marks the profile completed.
    pub fn update_name(&self, user_id: Uuid, name: &str) -> Result<User, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Name cannot be empty".to_string()));
        }

        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| anyhow!("user directory lock poisoned"))?;

        let account = accounts
            .values_mut()
            .find(|account| account.user.id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

        account.user.name = name.to_string();
        account.user.profile_completed = true;
        Ok(account.user.clone())
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::with_demo_account()
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
