use thiserror::Error;

use crate::site::OWNER_FIRST_NAME;

const DEFAULT_HOST: &str = "wa.me";
const DEFAULT_PHONE: &str = "919382472550";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your name and project details.")]
    Incomplete,
    #[error("Couldn't open {service}. Please allow pop-ups for this site and try again.")]
    HandoffBlocked { service: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandoffError {
    #[error("the browser refused to open a new window")]
    Blocked,
    #[error("couldn't open external link: {0}")]
    Failed(String),
}

/// Opens a URL outside of the page.
pub trait ExternalHandoff {
    fn open(&self, url: &str) -> Result<(), HandoffError>;
}

/// Free text typed into the contact form. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub details: String,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            details: details.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() || self.details.trim().is_empty() {
            return Err(ContactError::Incomplete);
        }
        Ok(())
    }
}

/// Messaging service the form hands off to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactChannel {
    pub service: String,
    pub host: String,
    pub phone_id: String,
}

impl Default for ContactChannel {
    fn default() -> Self {
        Self {
            service: "WhatsApp".to_string(),
            host: DEFAULT_HOST.to_string(),
            phone_id: DEFAULT_PHONE.to_string(),
        }
    }
}

impl ContactChannel {
    /// Channel configured at build time via `PORTFOLIO_CONTACT_HOST` / `PORTFOLIO_CONTACT_PHONE`.
    pub fn from_env() -> Self {
        let mut channel = Self::default();
        if let Some(host) = option_env!("PORTFOLIO_CONTACT_HOST") {
            channel.host = host.to_string();
        }
        if let Some(phone) = option_env!("PORTFOLIO_CONTACT_PHONE") {
            channel.phone_id = phone.to_string();
        }
        channel
    }

    pub fn message(&self, draft: &ContactDraft) -> String {
        format!(
            "Hi {}, my name is *{}*.\n\nI have a project in mind:\n{}",
            OWNER_FIRST_NAME,
            draft.name.trim(),
            draft.details.trim()
        )
    }

    pub fn deep_link(&self, draft: &ContactDraft) -> String {
        format!(
            "https://{}/{}?text={}",
            self.host,
            self.phone_id,
            urlencoding::encode(&self.message(draft))
        )
    }

    /// Validates the draft and hands the deep link to `handoff`. Returns the opened URL.
    pub fn submit(
        &self,
        draft: &ContactDraft,
        handoff: &impl ExternalHandoff,
    ) -> Result<String, ContactError> {
        draft.validate()?;
        let url = self.deep_link(draft);
        match handoff.open(&url) {
            Ok(()) => {
                log::info!("handed contact request off to {}", self.service);
                Ok(url)
            }
            Err(e) => {
                log::warn!("contact handoff to {} failed: {e}", self.service);
                Err(ContactError::HandoffBlocked {
                    service: self.service.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingHandoff {
        opened: RefCell<Vec<String>>,
        blocked: bool,
    }

    impl ExternalHandoff for RecordingHandoff {
        fn open(&self, url: &str) -> Result<(), HandoffError> {
            self.opened.borrow_mut().push(url.to_string());
            if self.blocked {
                Err(HandoffError::Blocked)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_empty_submit_shows_notice() {
        let handoff = RecordingHandoff::default();
        let channel = ContactChannel::default();

        let res = channel.submit(&ContactDraft::default(), &handoff);
        assert_eq!(res, Err(ContactError::Incomplete));
        assert_eq!(
            ContactError::Incomplete.to_string(),
            "Please fill in your name and project details."
        );
        assert!(handoff.opened.borrow().is_empty());
    }

    #[test]
    fn test_one_field_missing() {
        let handoff = RecordingHandoff::default();
        let channel = ContactChannel::default();

        for draft in [
            ContactDraft::new("Asha", ""),
            ContactDraft::new("", "Need a landing page"),
            ContactDraft::new("   ", "Need a landing page"),
            ContactDraft::new("Asha", "\n\t"),
        ] {
            assert_eq!(
                channel.submit(&draft, &handoff),
                Err(ContactError::Incomplete)
            );
        }
        assert!(handoff.opened.borrow().is_empty());
    }

    #[test]
    fn test_submit_opens_escaped_link_once() {
        let handoff = RecordingHandoff::default();
        let channel = ContactChannel::default();
        let draft = ContactDraft::new("Asha", "Need a landing page");

        let url = channel
            .submit(&draft, &handoff)
            .expect("valid draft should hand off");

        let opened = handoff.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0], url);
        assert!(url.starts_with("https://wa.me/919382472550?text="));
        assert!(url.contains("Asha"));
        assert!(url.contains("Need%20a%20landing%20page"));
        assert!(!url.contains(char::is_whitespace));
    }

    #[test]
    fn test_message_escapes_reserved_chars() {
        let channel = ContactChannel::default();
        let draft = ContactDraft::new("Tom & Jerry", "Budget: 50% up-front?\n#1 priority");
        let url = channel.deep_link(&draft);
        let query = url.split_once("?text=").map(|(_, q)| q).unwrap();

        assert!(!query.contains('&'));
        assert!(!query.contains('#'));
        assert!(!query.contains('?'));
        assert!(query.contains("%0A%0AI%20have%20a%20project%20in%20mind%3A%0A"));
        assert_eq!(
            urlencoding::decode(query).unwrap(),
            "Hi Niladri, my name is *Tom & Jerry*.\n\nI have a project in mind:\nBudget: 50% up-front?\n#1 priority"
        );
    }

    #[test]
    fn test_blocked_handoff_reported() {
        let handoff = RecordingHandoff {
            blocked: true,
            ..Default::default()
        };
        let channel = ContactChannel::default();
        let res = channel.submit(&ContactDraft::new("Asha", "Need a landing page"), &handoff);

        assert_eq!(
            res,
            Err(ContactError::HandoffBlocked {
                service: "WhatsApp".to_string()
            })
        );
        assert_eq!(handoff.opened.borrow().len(), 1);
    }

    #[test]
    fn test_custom_channel() {
        let channel = ContactChannel {
            service: "Chat".to_string(),
            host: "chat.example.com".to_string(),
            phone_id: "42".to_string(),
        };
        let url = channel.deep_link(&ContactDraft::new("Asha", "hi"));
        assert!(url.starts_with("https://chat.example.com/42?text=Hi%20Niladri"));
    }
}
