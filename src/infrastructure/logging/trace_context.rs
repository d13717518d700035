/// Session id generation for correlating log lines
pub struct TraceContext;

impl TraceContext {
    /// New session id (UUID v4)
    pub fn new_session_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_id() {
        let id1 = TraceContext::new_session_id();
        let id2 = TraceContext::new_session_id();

        assert_ne!(id1, id2);
        assert!(uuid::Uuid::parse_str(&id1).is_ok());
    }
}
