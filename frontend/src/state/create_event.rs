use shared::datetime::convert_datetime_local_to_iso;
use shared::{ClientError, CreateEventRequest, CreatedResponse, ReferenceItem, Result};
use std::future::Future;
use validator::Validate;

pub const DISTINCT_TEAMS_MESSAGE: &str = "Home team and away team must be different";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Datetime,
    Sport,
    HomeTeam,
    AwayTeam,
    Venue,
    Description,
}

impl FormField {
    /// Form control name, also used in validation messages
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Datetime => "datetime",
            FormField::Sport => "sport",
            FormField::HomeTeam => "home_team",
            FormField::AwayTeam => "away_team",
            FormField::Venue => "venue",
            FormField::Description => "description",
        }
    }
}

/// Raw values of the create form, exactly as the inputs hold them.
/// The default is the form's initial, unselected state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventForm {
    pub datetime: String,
    pub sport: String,
    pub home_team: String,
    pub away_team: String,
    pub venue: String,
    pub description: String,
}

impl EventForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Datetime => &self.datetime,
            FormField::Sport => &self.sport,
            FormField::HomeTeam => &self.home_team,
            FormField::AwayTeam => &self.away_team,
            FormField::Venue => &self.venue,
            FormField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Datetime => self.datetime = value,
            FormField::Sport => self.sport = value,
            FormField::HomeTeam => self.home_team = value,
            FormField::AwayTeam => self.away_team = value,
            FormField::Venue => self.venue = value,
            FormField::Description => self.description = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Marshals the form into the `POST /events` payload.
    ///
    /// Teams are checked before anything else is parsed; description and venue
    /// are only sent when filled in.
    pub fn build_payload(&self) -> Result<CreateEventRequest> {
        let home_team_id = self.parse_id(FormField::HomeTeam)?;
        let away_team_id = self.parse_id(FormField::AwayTeam)?;
        if home_team_id == away_team_id {
            return Err(ClientError::validation(DISTINCT_TEAMS_MESSAGE));
        }

        let event_datetime = convert_datetime_local_to_iso(&self.datetime)?;
        let sport_id = self.parse_id(FormField::Sport)?;

        let description = Some(self.description.clone()).filter(|d| !d.is_empty());
        let venue_id = if self.venue.trim().is_empty() {
            None
        } else {
            Some(self.parse_id(FormField::Venue)?)
        };

        let payload = CreateEventRequest {
            event_datetime,
            sport_id,
            home_team_id,
            away_team_id,
            description,
            venue_id,
        };
        payload.validate()?;
        Ok(payload)
    }

    fn parse_id(&self, field: FormField) -> Result<i64> {
        self.value(field)
            .trim()
            .parse::<i64>()
            .map_err(|_| ClientError::validation(format!("Invalid value for \"{}\"", field.name())))
    }
}

/// Validates the form and hands the payload to `send`, returning the new id.
/// `send` is never called when validation fails.
pub async fn submit_create_event<F, Fut>(form: &EventForm, send: F) -> Result<i64>
where
    F: FnOnce(CreateEventRequest) -> Fut,
    Fut: Future<Output = Result<CreatedResponse>>,
{
    let payload = form.build_payload()?;
    let created = send(payload).await?;
    Ok(created.id)
}

/// Inline status under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    Success(i64),
    Error(String),
}

impl FormMessage {
    pub fn from_result(result: &Result<i64>) -> Self {
        match result {
            Ok(id) => Self::Success(*id),
            Err(e) => Self::Error(e.user_message()),
        }
    }

    pub fn text(&self) -> String {
        match self {
            Self::Success(id) => format!("Successfully created event with ID: {}", id),
            Self::Error(message) => message.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

/// Placeholder first, then one option per item. A required field's
/// placeholder cannot be picked back once something else is chosen.
pub fn select_options(items: &[ReferenceItem], placeholder: &str, required: bool) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: placeholder.to_string(),
        disabled: required,
    })
    .chain(items.iter().map(|item| SelectOption {
        value: item.id.to_string(),
        label: item.name.clone(),
        disabled: false,
    }))
    .collect()
}

/// Single disabled entry shown while reference data is in flight.
pub fn loading_options() -> Vec<SelectOption> {
    vec![SelectOption {
        value: String::new(),
        label: "Loading...".to_string(),
        disabled: true,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn filled_form() -> EventForm {
        EventForm {
            datetime: "2024-05-01T10:00".to_string(),
            sport: "1".to_string(),
            home_team: "2".to_string(),
            away_team: "3".to_string(),
            venue: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_payload_from_required_fields() {
        let payload = filled_form().build_payload().unwrap();
        assert_eq!(payload.sport_id, 1);
        assert_eq!(payload.home_team_id, 2);
        assert_eq!(payload.away_team_id, 3);
        assert_eq!(payload.venue_id, None);
        assert_eq!(payload.description, None);
        assert!(payload.event_datetime.ends_with('Z'));
    }

    #[test]
    fn test_optional_fields_included_when_filled() {
        let mut form = filled_form();
        form.set(FormField::Venue, "7".to_string());
        form.set(FormField::Description, "Derby day".to_string());
        let payload = form.build_payload().unwrap();
        assert_eq!(payload.venue_id, Some(7));
        assert_eq!(payload.description.as_deref(), Some("Derby day"));
    }

    #[test]
    fn test_description_sent_as_typed() {
        let mut form = filled_form();
        form.set(FormField::Description, "  padded note \n".to_string());
        let payload = form.build_payload().unwrap();
        assert_eq!(payload.description.as_deref(), Some("  padded note \n"));

        form.set(FormField::Description, "   ".to_string());
        assert_eq!(form.build_payload().unwrap().description.as_deref(), Some("   "));
    }

    #[test]
    fn test_same_teams_rejected() {
        let mut form = filled_form();
        form.set(FormField::AwayTeam, "2".to_string());
        assert_eq!(
            form.build_payload(),
            Err(ClientError::validation(DISTINCT_TEAMS_MESSAGE))
        );
    }

    #[test]
    fn test_same_teams_checked_before_datetime() {
        let mut form = filled_form();
        form.set(FormField::AwayTeam, "2".to_string());
        form.set(FormField::Datetime, String::new());
        assert_eq!(
            form.build_payload(),
            Err(ClientError::validation(DISTINCT_TEAMS_MESSAGE))
        );
    }

    #[test]
    fn test_non_numeric_ids_rejected() {
        let mut form = filled_form();
        form.set(FormField::Sport, String::new());
        assert_eq!(
            form.build_payload(),
            Err(ClientError::validation("Invalid value for \"sport\""))
        );

        let mut form = filled_form();
        form.set(FormField::Venue, "main stadium".to_string());
        assert_eq!(
            form.build_payload(),
            Err(ClientError::validation("Invalid value for \"venue\""))
        );
    }

    #[test]
    fn test_missing_datetime_rejected() {
        let mut form = filled_form();
        form.set(FormField::Datetime, String::new());
        assert_eq!(
            form.build_payload(),
            Err(ClientError::validation("Datetime value is required"))
        );
    }

    #[test]
    fn test_negative_id_fails_structural_validation() {
        let mut form = filled_form();
        form.set(FormField::Sport, "-4".to_string());
        assert_eq!(
            form.build_payload(),
            Err(ClientError::validation("Sport must be selected"))
        );
    }

    #[test]
    fn test_submit_with_same_teams_never_sends() {
        let mut form = filled_form();
        form.set(FormField::AwayTeam, "2".to_string());
        let called = Cell::new(false);

        let result = block_on(submit_create_event(&form, |_| {
            called.set(true);
            async { Ok(CreatedResponse { id: 1 }) }
        }));

        assert!(!called.get());
        assert_eq!(
            FormMessage::from_result(&result),
            FormMessage::Error(DISTINCT_TEAMS_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_submit_surfaces_server_error_verbatim() {
        let result = block_on(submit_create_event(&filled_form(), |_| async {
            Err(ClientError::api(
                400,
                "Bad Request",
                r#"{"error":"venue not found"}"#,
            ))
        }));
        let message = FormMessage::from_result(&result);
        assert_eq!(message, FormMessage::Error("venue not found".to_string()));
        assert_eq!(message.text(), "venue not found");
        assert!(message.is_error());
    }

    #[test]
    fn test_submit_success_returns_id() {
        let result = block_on(submit_create_event(&filled_form(), |payload| async move {
            assert_eq!(payload.home_team_id, 2);
            Ok(CreatedResponse { id: 77 })
        }));
        let message = FormMessage::from_result(&result);
        assert_eq!(message.text(), "Successfully created event with ID: 77");
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form, EventForm::default());
    }

    #[test]
    fn test_select_options_required_placeholder() {
        let items = vec![ReferenceItem::new(1, "Football"), ReferenceItem::new(2, "Ice Hockey")];
        let options = select_options(&items, "Select Sport", true);
        assert_eq!(options.len(), 3);
        assert_eq!(
            options[0],
            SelectOption {
                value: String::new(),
                label: "Select Sport".to_string(),
                disabled: true
            }
        );
        assert_eq!(options[2].value, "2");
        assert_eq!(options[2].label, "Ice Hockey");
    }

    #[test]
    fn test_select_options_optional_placeholder_stays_selectable() {
        let options = select_options(&[], "Select Venue (Optional)", false);
        assert_eq!(options.len(), 1);
        assert!(!options[0].disabled);
    }
}
