//! Student — a biographical record managed by the education office.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ParseError;
use crate::id::StudentId;
use crate::validation::digits_only;

/// Fixed two-value gender set used by the student records.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("Male"),
            Self::Female => f.write_str("Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            other => Err(ParseError::Gender(other.to_string())),
        }
    }
}

/// A student record as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub gender: Gender,
    pub place_of_birth: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    pub last_education: String,
    pub school_name: String,
    pub graduation_year: u16,
    pub certificate: String,
    pub nik: String,
    pub religion: String,
    pub training_location: String,
}

/// Form payload for creating or updating a student.
///
/// One schema serves both the add and the edit form. The date stays the
/// `input[type=date]` string (`YYYY-MM-DD`); the server parses it into a
/// proper date, which comes back as [`Student::date_of_birth`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentForm {
    #[validate(length(min = 1, message = "Wajib diisi"))]
    pub name: String,
    pub gender: Gender,
    #[validate(length(min = 1, message = "Wajib diisi"))]
    pub place_of_birth: String,
    #[validate(length(min = 1, message = "Wajib diisi"))]
    pub date_of_birth: String,
    #[validate(length(min = 1, message = "Wajib diisi"))]
    pub address: String,
    #[validate(
        custom(function = digits_only),
        length(min = 10, max = 12, message = "Harus 10 sampai 12 angka")
    )]
    pub phone_number: String,
    #[validate(
        length(min = 1, message = "Wajib diisi"),
        email(message = "Email tidak valid")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Wajib diisi"))]
    pub last_education: String,
    #[validate(length(min = 1, message = "Wajib diisi"))]
    pub school_name: String,
    #[validate(range(min = 1, message = "Wajib diisi"))]
    pub graduation_year: u16,
    #[validate(length(min = 1, message = "Wajib diisi"))]
    pub certificate: String,
    #[validate(
        custom(function = digits_only),
        length(equal = 16, message = "Harus 16 angka")
    )]
    pub nik: String,
    #[validate(length(min = 1, message = "Wajib diisi"))]
    pub religion: String,
    #[validate(length(min = 1, message = "Wajib diisi"))]
    pub training_location: String,
}

impl StudentForm {
    /// Seed an edit form from a fetched record.
    #[must_use]
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            gender: student.gender,
            place_of_birth: student.place_of_birth.clone(),
            date_of_birth: student.date_of_birth.to_string(),
            address: student.address.clone(),
            phone_number: student.phone_number.clone(),
            email: student.email.clone(),
            last_education: student.last_education.clone(),
            school_name: student.school_name.clone(),
            graduation_year: student.graduation_year,
            certificate: student.certificate.clone(),
            nik: student.nik.clone(),
            religion: student.religion.clone(),
            training_location: student.training_location.clone(),
        }
    }
}

/// Query parameters accepted by the student list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentQuery {
    pub page: u64,
    pub limit: u64,
    pub search: String,
}

impl Default for StudentQuery {
    fn default() -> Self {
        Self {
            page: 0,
            limit: 10,
            search: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::first_messages;

    fn valid_form() -> StudentForm {
        StudentForm {
            name: "Budi".to_string(),
            gender: Gender::Male,
            place_of_birth: "Manado".to_string(),
            date_of_birth: "2002-05-17".to_string(),
            address: "Jl. Sam Ratulangi No. 12".to_string(),
            phone_number: "081234567890".to_string(),
            email: "budi@example.com".to_string(),
            last_education: "SMA".to_string(),
            school_name: "SMA Negeri 1 Manado".to_string(),
            graduation_year: 2020,
            certificate: "Ada".to_string(),
            nik: "1234567890123456".to_string(),
            religion: "Islam".to_string(),
            training_location: "Manado".to_string(),
        }
    }

    #[test]
    fn should_accept_fully_populated_form() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn should_reject_nik_of_fifteen_digits_with_length_message() {
        let mut form = valid_form();
        form.nik = "123456789012345".to_string();

        let errors = form.validate().unwrap_err();
        let messages = first_messages(&errors);
        assert_eq!(
            messages.get("nik").map(String::as_str),
            Some("Harus 16 angka")
        );
    }

    #[test]
    fn should_reject_non_numeric_nik() {
        let mut form = valid_form();
        form.nik = "12345678901234ab".to_string();

        let errors = form.validate().unwrap_err();
        let messages = first_messages(&errors);
        assert_eq!(
            messages.get("nik").map(String::as_str),
            Some("Hanya boleh angka")
        );
    }

    #[test]
    fn should_reject_phone_number_outside_ten_to_twelve_digits() {
        let mut form = valid_form();
        form.phone_number = "081234".to_string();
        assert!(form.validate().is_err());

        form.phone_number = "0812345678901".to_string();
        assert!(form.validate().is_err());

        form.phone_number = "0812345678".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn should_collect_required_message_for_each_blank_field() {
        let errors = StudentForm::default().validate().unwrap_err();
        let messages = first_messages(&errors);
        assert_eq!(
            messages.get("name").map(String::as_str),
            Some("Wajib diisi")
        );
        assert_eq!(
            messages.get("graduation_year").map(String::as_str),
            Some("Wajib diisi")
        );
        // Blank phone and nik fail their numeric rule first, like the
        // production forms did.
        assert_eq!(
            messages.get("phone_number").map(String::as_str),
            Some("Hanya boleh angka")
        );
    }

    #[test]
    fn should_seed_form_from_student_record() {
        let student = Student {
            id: StudentId::new(),
            name: "Budi".to_string(),
            gender: Gender::Male,
            place_of_birth: "Manado".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2002, 5, 17).unwrap(),
            address: "Jl. Sam Ratulangi No. 12".to_string(),
            phone_number: "081234567890".to_string(),
            email: "budi@example.com".to_string(),
            last_education: "SMA".to_string(),
            school_name: "SMA Negeri 1 Manado".to_string(),
            graduation_year: 2020,
            certificate: "Ada".to_string(),
            nik: "1234567890123456".to_string(),
            religion: "Islam".to_string(),
            training_location: "Manado".to_string(),
        };

        let form = StudentForm::from_student(&student);
        assert_eq!(form.date_of_birth, "2002-05-17");
        assert_eq!(form.nik, student.nik);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn should_serialize_form_with_camel_case_keys() {
        let json = serde_json::to_value(valid_form()).unwrap();
        assert!(json.get("placeOfBirth").is_some());
        assert!(json.get("trainingLocation").is_some());
        assert_eq!(json["gender"], "Male");
        assert_eq!(json["graduationYear"], 2020);
    }

    #[test]
    fn should_roundtrip_student_through_serde_json() {
        let student = Student {
            id: StudentId::new(),
            name: "Sari".to_string(),
            gender: Gender::Female,
            place_of_birth: "Tomohon".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2001, 11, 3).unwrap(),
            address: "Jl. Raya Tomohon".to_string(),
            phone_number: "08987654321".to_string(),
            email: "sari@example.com".to_string(),
            last_education: "SMK".to_string(),
            school_name: "SMK Kristen Tomohon".to_string(),
            graduation_year: 2019,
            certificate: "Ada".to_string(),
            nik: "6543210987654321".to_string(),
            religion: "Kristen Protestan".to_string(),
            training_location: "Tondano".to_string(),
        };

        let json = serde_json::to_string(&student).unwrap();
        let parsed: Student = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, student);
    }
}
