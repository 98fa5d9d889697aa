use serde::Deserialize;
use thiserror::Error;

use super::members::MemberId;
use super::team::NewTeam;

/// Incoming payload for creating a team
///
/// Every field is optional at the decode stage so that a missing field is
/// reported by validation rather than as malformed input. Unknown fields are
/// ignored. Keys match case-sensitively. Member ids are unsigned; a negative
/// id is malformed input.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTeamRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub members: Option<Vec<MemberId>>,
}

/// A request that passed validation, split into the team to create and the
/// member ids to resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub team: NewTeam,
    pub members: Vec<MemberId>,
}

/// Required fields that were missing or empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", .fields.join(", "))]
pub struct ValidationError {
    fields: Vec<&'static str>,
}

impl ValidationError {
    pub(crate) fn new(fields: Vec<&'static str>) -> Self {
        Self { fields }
    }

    /// Names of the offending fields, in payload declaration order
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }
}

impl CreateTeamRequest {
    /// Decodes a raw JSON payload
    ///
    /// Fails on invalid JSON or on fields of the wrong type (e.g. a string in
    /// `members`). Absent and `null` fields decode to `None`.
    pub fn decode(payload: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(payload)
    }

    /// Applies the presence rules to `name`, `about` and `color`
    ///
    /// `members` has no required-ness constraint: absent, `null` and `[]` all
    /// yield an empty list. Ids are kept in order, duplicates included.
    pub fn validate(self) -> Result<ValidatedRequest, ValidationError> {
        let team = NewTeam::new(
            self.name.unwrap_or_default(),
            self.about.unwrap_or_default(),
            self.color.unwrap_or_default(),
        )?;

        Ok(ValidatedRequest {
            team,
            members: self.members.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_full_payload() {
        let req = CreateTeamRequest::decode(
            br##"{"name":"Core","about":"Core team","color":"#ff0000","members":[1,2,999]}"##,
        )
        .unwrap();

        assert_eq!(req.name.as_deref(), Some("Core"));
        assert_eq!(req.about.as_deref(), Some("Core team"));
        assert_eq!(req.color.as_deref(), Some("#ff0000"));
        assert_eq!(req.members, Some(vec![1, 2, 999]));
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let req = CreateTeamRequest::decode(br#"{"name":"a","extra":true}"#).unwrap();

        assert_eq!(req.name.as_deref(), Some("a"));
    }

    #[test]
    fn decode_rejects_invalid_json() {
        assert!(CreateTeamRequest::decode(b"{not json").is_err());
        assert!(CreateTeamRequest::decode(b"").is_err());
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        assert!(CreateTeamRequest::decode(b"[1,2,3]").is_err());
        assert!(CreateTeamRequest::decode(br#"{"name":5}"#).is_err());
        assert!(CreateTeamRequest::decode(br#"{"members":["1"]}"#).is_err());
        assert!(CreateTeamRequest::decode(br#"{"members":1}"#).is_err());
    }

    #[test]
    fn decode_accepts_full_unsigned_member_range() {
        let req = CreateTeamRequest::decode(br#"{"members":[1,18446744073709551615]}"#).unwrap();

        assert_eq!(req.members, Some(vec![1, u64::MAX]));
    }

    #[test]
    fn decode_rejects_negative_member_ids() {
        assert!(CreateTeamRequest::decode(br#"{"members":[-5]}"#).is_err());
    }

    #[test]
    fn keys_are_case_sensitive() {
        let err = CreateTeamRequest::decode(br#"{"Name":"a","About":"b","Color":"c"}"#)
            .unwrap()
            .validate()
            .unwrap_err();

        assert_eq!(err.fields(), ["name", "about", "color"]);
    }

    #[test]
    fn validate_empty_name_fails() {
        let err = CreateTeamRequest::decode(br#"{"name":"","about":"x","color":"x"}"#)
            .unwrap()
            .validate()
            .unwrap_err();

        assert_eq!(err.fields(), ["name"]);
        assert_eq!(err.to_string(), "missing required fields: name");
    }

    #[test]
    fn validate_absent_and_null_fields_fail() {
        let err = CreateTeamRequest::decode(br#"{"name":"a","about":null}"#)
            .unwrap()
            .validate()
            .unwrap_err();

        assert_eq!(err.fields(), ["about", "color"]);
        assert_eq!(err.to_string(), "missing required fields: about, color");
    }

    #[test]
    fn validate_without_members_yields_empty_list() {
        let payloads: [&[u8]; 3] = [
            br#"{"name":"a","about":"b","color":"c"}"#,
            br#"{"name":"a","about":"b","color":"c","members":null}"#,
            br#"{"name":"a","about":"b","color":"c","members":[]}"#,
        ];

        for payload in payloads {
            let validated = CreateTeamRequest::decode(payload)
                .unwrap()
                .validate()
                .unwrap();

            assert!(validated.members.is_empty());
        }
    }

    #[test]
    fn validate_keeps_member_order_and_duplicates() {
        let validated =
            CreateTeamRequest::decode(br#"{"name":"a","about":"b","color":"c","members":[3,1,3]}"#)
                .unwrap()
                .validate()
                .unwrap();

        assert_eq!(validated.members, vec![3, 1, 3]);
        assert_eq!(validated.team.name(), "a");
    }
}
