use crate::data::student::StudentFields;
use bitflags::bitflags;
use snafu::Snafu;

bitflags! {
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct RequiredFields: u8 {
        const STUDENT_ID = 0b0000_0001;
        const NAME =       0b0000_0010;
        const EMAIL =      0b0000_0100;
        const MAJOR =      0b0000_1000;
        const GPA =        0b0001_0000;

        //the id is the lookup key for updates, not part of the payload
        const PAYLOAD = Self::NAME.bits() | Self::EMAIL.bits() | Self::MAJOR.bits() | Self::GPA.bits();
        const EVERYTHING = Self::STUDENT_ID.bits() | Self::PAYLOAD.bits();
    }
}

impl RequiredFields {
    pub fn as_nice_list(&self) -> impl Iterator<Item = &'static str> {
        self.iter().filter_map(|x| match x {
            Self::STUDENT_ID => Some("studentID"),
            Self::NAME => Some("name"),
            Self::EMAIL => Some("email"),
            Self::MAJOR => Some("major"),
            Self::GPA => Some("gpa"),
            _ => None,
        })
    }
}

///the `Display` of each variant is exactly what ends up in the message area
#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[snafu(display("Please enter a Student ID."))]
    MissingStudentId,
    #[snafu(display("Please fill in all fields."))]
    MissingFields { missing: RequiredFields },
    #[snafu(display("Please enter a valid GPA (0-4)."))]
    InvalidGpa { raw: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidStudent<'a> {
    pub student_id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub major: &'a str,
    pub gpa: f64,
}

pub const GPA_RANGE: std::ops::RangeInclusive<f64> = 0.0..=4.0;

pub fn require_student_id(student_id: &str) -> Result<&str, ValidationError> {
    if student_id.is_empty() {
        Err(ValidationError::MissingStudentId)
    } else {
        Ok(student_id)
    }
}

///checks that every field in `required` was filled in, then that the GPA is a number in `0..=4`
///
///fields outside of `required` are passed through untouched, so callers decide what they send
pub fn validate_fields(
    fields: &StudentFields,
    required: RequiredFields,
) -> Result<ValidStudent<'_>, ValidationError> {
    let StudentFields {
        student_id,
        name,
        email,
        major,
        gpa,
    } = fields;
    let gpa = gpa.trim();

    let mut missing = RequiredFields::empty();
    for (flag, value) in [
        (RequiredFields::STUDENT_ID, student_id.as_str()),
        (RequiredFields::NAME, name.as_str()),
        (RequiredFields::EMAIL, email.as_str()),
        (RequiredFields::MAJOR, major.as_str()),
        (RequiredFields::GPA, gpa),
    ] {
        if required.contains(flag) && value.is_empty() {
            missing |= flag;
        }
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { missing });
    }

    let parsed_gpa = if required.contains(RequiredFields::GPA) {
        parse_gpa(gpa)?
    } else {
        //not asked for, so not sent - anything will do
        0.0
    };

    Ok(ValidStudent {
        student_id,
        name,
        email,
        major,
        gpa: parsed_gpa,
    })
}

fn parse_gpa(raw: &str) -> Result<f64, ValidationError> {
    match raw.parse::<f64>() {
        //`-0` is in range, but should go out as plain `0`
        Ok(gpa) if gpa.is_finite() && GPA_RANGE.contains(&gpa) => Ok(gpa + 0.0),
        _ => Err(ValidationError::InvalidGpa {
            raw: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> StudentFields {
        StudentFields {
            student_id: "S1".into(),
            name: "Alice".into(),
            email: "a@x.com".into(),
            major: "CS".into(),
            gpa: "3.5".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        let fields = alice();
        let valid = validate_fields(&fields, RequiredFields::EVERYTHING).unwrap();
        assert_eq!(valid.student_id, "S1");
        assert_eq!(valid.major, "CS");
        assert!((valid.gpa - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn any_single_empty_field_is_reported() {
        let blankers: [(fn(&mut StudentFields), RequiredFields); 5] = [
            (|f| f.student_id.clear(), RequiredFields::STUDENT_ID),
            (|f| f.name.clear(), RequiredFields::NAME),
            (|f| f.email.clear(), RequiredFields::EMAIL),
            (|f| f.major.clear(), RequiredFields::MAJOR),
            (|f| f.gpa.clear(), RequiredFields::GPA),
        ];

        for (blank, flag) in blankers {
            let mut fields = alice();
            blank(&mut fields);
            let err = validate_fields(&fields, RequiredFields::EVERYTHING).unwrap_err();
            assert_eq!(err, ValidationError::MissingFields { missing: flag });
            assert_eq!(err.to_string(), "Please fill in all fields.");
        }
    }

    #[test]
    fn payload_validation_ignores_the_id() {
        let mut fields = alice();
        fields.student_id.clear();
        assert!(validate_fields(&fields, RequiredFields::PAYLOAD).is_ok());
    }

    #[test]
    fn missing_fields_win_over_bad_gpa() {
        let mut fields = alice();
        fields.name.clear();
        fields.gpa = "seven".into();
        assert!(matches!(
            validate_fields(&fields, RequiredFields::EVERYTHING),
            Err(ValidationError::MissingFields { .. })
        ));
    }

    #[test]
    fn gpa_bounds_are_inclusive() {
        for ok in ["0", "4", "0.0", "4.00", " 2.75 "] {
            let mut fields = alice();
            fields.gpa = ok.into();
            assert!(
                validate_fields(&fields, RequiredFields::EVERYTHING).is_ok(),
                "{ok:?} should be accepted"
            );
        }
    }

    #[test]
    fn negative_zero_gpa_becomes_zero() {
        for zero in ["-0", "-0.0"] {
            let mut fields = alice();
            fields.gpa = zero.into();
            let valid = validate_fields(&fields, RequiredFields::EVERYTHING).unwrap();
            assert!(valid.gpa.is_sign_positive(), "{zero:?} kept its sign");
            assert_eq!(serde_json::to_string(&valid.gpa).unwrap(), "0.0");
        }
    }

    #[test]
    fn out_of_range_or_non_numeric_gpa_is_rejected() {
        for bad in ["-0.1", "4.01", "100", "abc", "3.5abc", "NaN", "inf", "-inf"] {
            let mut fields = alice();
            fields.gpa = bad.into();
            let err = validate_fields(&fields, RequiredFields::EVERYTHING).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidGpa { .. }),
                "{bad:?} should be rejected"
            );
            assert_eq!(err.to_string(), "Please enter a valid GPA (0-4).");
        }
    }

    #[test]
    fn whitespace_only_gpa_counts_as_missing() {
        let mut fields = alice();
        fields.gpa = "   ".into();
        assert!(matches!(
            validate_fields(&fields, RequiredFields::EVERYTHING),
            Err(ValidationError::MissingFields { .. })
        ));
    }

    #[test]
    fn student_id_requirement() {
        assert_eq!(require_student_id("S1"), Ok("S1"));
        let err = require_student_id("").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a Student ID.");
    }

    #[test]
    fn nice_list_names_the_form_fields() {
        let missing = RequiredFields::NAME | RequiredFields::GPA;
        assert_eq!(missing.as_nice_list().collect::<Vec<_>>(), ["name", "gpa"]);
    }
}
