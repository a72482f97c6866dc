use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::provider::{SessionError, SessionProvider};
use crate::session::{Role, Session, UserType};

/// The resolved identity for one run of the client.
///
/// Built once from a [`SessionProvider`] and passed down explicitly.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    session: Option<Session>,
}

impl SessionContext {
    pub fn new(session: Option<Session>) -> Self {
        Self { session }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Loads the session from `provider`. Expired sessions resolve to signed out.
    pub fn resolve<P>(provider: &P) -> Result<Self, SessionError>
    where
        P: SessionProvider + ?Sized,
    {
        let session = match provider.load()? {
            Some(session) if session.is_expired(Utc::now()) => {
                warn!(user_id = %session.user_id, "Session expired, continuing signed out");
                None
            }
            Some(session) => {
                info!(user_id = %session.user_id, role = %session.role, "Session resolved");
                Some(session)
            }
            None => None,
        };

        Ok(Self { session })
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.session.as_ref().map(|s| s.user_type)
    }

    pub fn school_id(&self) -> Option<Uuid> {
        self.session.as_ref().and_then(|s| s.school_id)
    }

    pub fn platform_id(&self) -> Option<Uuid> {
        self.session.as_ref().and_then(|s| s.platform_id)
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticSessionProvider;
    use chrono::Duration;

    fn session(role: Role) -> Session {
        Session {
            user_id: Uuid::nil(),
            role,
            user_type: UserType::Other,
            platform_id: None,
            school_id: Some(Uuid::from_u128(7)),
            access_token: "tok".into(),
            expires_at: None,
        }
    }

    #[test]
    fn test_resolve_signed_in() {
        let context =
            SessionContext::resolve(&StaticSessionProvider(Some(session(Role::Teacher)))).unwrap();
        assert!(context.is_authenticated());
        assert_eq!(context.role(), Some(Role::Teacher));
        assert_eq!(context.access_token(), Some("tok"));
        assert_eq!(context.school_id(), Some(Uuid::from_u128(7)));
    }

    #[test]
    fn test_resolve_signed_out() {
        let context = SessionContext::resolve(&StaticSessionProvider(None)).unwrap();
        assert!(!context.is_authenticated());
        assert!(context.role().is_none());
        assert!(context.user_type().is_none());
    }

    #[test]
    fn test_resolve_drops_expired_session() {
        let mut expired = session(Role::Student);
        expired.expires_at = Some(Utc::now() - Duration::minutes(1));
        let context = SessionContext::resolve(&StaticSessionProvider(Some(expired))).unwrap();
        assert!(!context.is_authenticated());
    }
}
