//! User domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::ids::UserId;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    /// Regular account that can book stations
    Standard,
    /// Account with extended rights (station/location management)
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Admin => "Admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Standard" => Some(Self::Standard),
            "Admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account able to reserve charging stations.
///
/// The credential is stored opaquely; hashing and verification belong to an
/// authentication layer outside this service. Reservations reference the
/// user by id, there is no owned back-collection here.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    /// Unique across all users
    pub email: String,
    pub password: String,
    /// One-shot code sent out-of-band to confirm the email address
    pub validation_code: Option<String>,
    pub validated: bool,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: UserId::new(),
            email: email.into(),
            password: password.into(),
            validation_code: Some(Uuid::new_v4().to_string()),
            validated: false,
            role,
            created_at: Utc::now(),
        }
    }

    /// Mark the account as validated and retire the pending code.
    pub fn validate(&mut self) {
        self.validated = true;
        self.validation_code = None;
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

// ── Tests ──────────────────────────────────────────────────────
