//! Unit tests for validation.rs module

use grievance_redressal::validation::InputValidator;

#[test]
fn test_validate_city_valid() {
    assert!(InputValidator::validate_city("Nagpur").is_ok());
}

#[test]
fn test_validate_city_unicode() {
    assert!(InputValidator::validate_city("Bengaluru (ಬೆಂಗಳೂರು)").is_ok());
}

#[test]
fn test_validate_city_empty() {
    assert!(InputValidator::validate_city("").is_err());
}

#[test]
fn test_validate_city_whitespace_only() {
    assert!(InputValidator::validate_city("   ").is_err());
}

#[test]
fn test_validate_city_too_long() {
    let long_city = "a".repeat(101);
    assert!(InputValidator::validate_city(&long_city).is_err());
}

#[test]
fn test_validate_city_exactly_100_chars() {
    let city = "a".repeat(100);
    assert!(InputValidator::validate_city(&city).is_ok());
}

#[test]
fn test_validate_city_with_newline() {
    assert!(InputValidator::validate_city("Pune\nMumbai").is_err());
}

#[test]
fn test_validate_description_valid() {
    assert!(InputValidator::validate_description("Water supply cut for 3 days").is_ok());
}

#[test]
fn test_validate_description_multiline() {
    assert!(InputValidator::validate_description("Line one\nLine two").is_ok());
}

#[test]
fn test_validate_description_empty() {
    assert!(InputValidator::validate_description("").is_err());
    assert!(InputValidator::validate_description(" \n\t ").is_err());
}

#[test]
fn test_validate_description_too_long() {
    let long = "x".repeat(5001);
    assert!(InputValidator::validate_description(&long).is_err());
    let max = "x".repeat(5000);
    assert!(InputValidator::validate_description(&max).is_ok());
}

#[test]
fn test_validate_description_with_null_byte() {
    assert!(InputValidator::validate_description("bad\0byte").is_err());
}

#[test]
fn test_validate_name_blank_is_allowed() {
    assert!(InputValidator::validate_name("").is_ok());
    assert!(InputValidator::validate_name("   ").is_ok());
}

#[test]
fn test_validate_name_with_special_chars() {
    assert!(InputValidator::validate_name("D'Souza-Patil").is_ok());
}

#[test]
fn test_validate_name_too_long() {
    assert!(InputValidator::validate_name(&"n".repeat(101)).is_err());
}

#[test]
fn test_validate_name_with_carriage_return() {
    assert!(InputValidator::validate_name("Ravi\rKumar").is_err());
}

#[test]
fn test_validate_grievance_id_valid() {
    assert!(InputValidator::validate_grievance_id("9f86d081").is_ok());
}

#[test]
fn test_validate_grievance_id_wrong_length() {
    assert!(InputValidator::validate_grievance_id("9f86d0811").is_err());
    assert!(InputValidator::validate_grievance_id("").is_err());
}

#[test]
fn test_validate_grievance_id_non_hex() {
    assert!(InputValidator::validate_grievance_id("9f86d08g").is_err());
    assert!(InputValidator::validate_grievance_id("../../et").is_err());
}
