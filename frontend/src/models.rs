use serde::{Deserialize, Serialize};

/// What the user has typed into the contact form so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftError {
    MissingFields(Vec<&'static str>),
}

/// Body of `POST /api/contact`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactDraft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Name, email and message must be non-blank. Subject is optional.
    pub fn validate(&self) -> Result<ContactPayload, DraftError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(DraftError::MissingFields(missing));
        }

        let subject = self.subject.trim();
        Ok(ContactPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message: self.message.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Ana".into(),
            email: "ana@farm.example".into(),
            subject: "farmer".into(),
            message: "Do you buy straw pellets?".into(),
        }
    }

    #[test]
    fn complete_draft_becomes_payload() {
        let payload = filled().validate().unwrap();
        assert_eq!(payload.name, "Ana");
        assert_eq!(payload.subject.as_deref(), Some("farmer"));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["email"], "ana@farm.example");
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let draft = ContactDraft {
            email: "   ".into(),
            message: String::new(),
            ..filled()
        };
        assert_eq!(
            draft.validate(),
            Err(DraftError::MissingFields(vec!["email", "message"]))
        );
    }

    #[test]
    fn subject_is_optional() {
        let draft = ContactDraft {
            subject: String::new(),
            ..filled()
        };
        let payload = draft.validate().unwrap();
        assert_eq!(payload.subject, None);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("subject").is_none());
    }

    #[test]
    fn set_updates_one_field() {
        let mut draft = ContactDraft::default();
        draft.set(Field::Message, "hello".into());
        assert_eq!(draft.message, "hello");
        assert!(draft.name.is_empty());
    }
}
