use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::basic_types::Date;

/// Describes Telegram Passport data shared with the bot by the user.
/// https://core.telegram.org/bots/api#passportdata
#[derive(Debug, Deserialize, Serialize)]
pub struct PassportData {
    pub data: Vec<EncryptedPassportElement>,
    pub credentials: EncryptedCredentials,
}

/// This object represents a file uploaded to Telegram Passport.
/// Currently all Telegram Passport files are in JPEG format when decrypted
/// and don't exceed 10MB.
/// https://core.telegram.org/bots/api#passportfile
#[derive(Debug, Deserialize, Serialize)]
pub struct PassportFile {
    pub file_id: CompactString,
    pub file_unique_id: CompactString,
    pub file_size: i64,
    pub file_date: Date,
}

/// Element type. One of “personal_details”, “passport”, “driver_license”,
/// “identity_card”, “internal_passport”, “address”, “utility_bill”,
/// “bank_statement”, “rental_agreement”, “passport_registration”,
/// “temporary_registration”, “phone_number”, “email”.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PassportElementType {
    PersonalDetails,
    Passport,
    DriverLicense,
    IdentityCard,
    InternalPassport,
    Address,
    UtilityBill,
    BankStatement,
    RentalAgreement,
    PassportRegistration,
    TemporaryRegistration,
    PhoneNumber,
    Email,
}

/// Describes documents or other Telegram Passport elements shared with the bot by the user.
/// https://core.telegram.org/bots/api#encryptedpassportelement
#[skip_serializing_none]
#[derive(Debug, Deserialize, Serialize)]
pub struct EncryptedPassportElement {
    #[serde(rename = "type")]
    pub element_type: PassportElementType,
    pub data: Option<CompactString>,
    pub phone_number: Option<CompactString>,
    pub email: Option<CompactString>,
    pub files: Option<Vec<PassportFile>>,
    pub front_side: Option<PassportFile>,
    pub reverse_side: Option<PassportFile>,
    pub selfie: Option<PassportFile>,
    pub translation: Option<Vec<PassportFile>>,
    pub hash: CompactString,
}

/// Contains data required for decrypting and authenticating
/// [EncryptedPassportElement](https://core.telegram.org/bots/api#encryptedpassportelement).
/// https://core.telegram.org/bots/api#encryptedcredentials
#[derive(Debug, Deserialize, Serialize)]
pub struct EncryptedCredentials {
    pub data: CompactString,
    pub hash: CompactString,
    pub secret: CompactString,
}

/// An error in a Telegram Passport element submitted by the user
/// that should be resolved by the user.
/// https://core.telegram.org/bots/api#passportelementerror
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PassportElementError {
    DataField(PassportElementErrorDataField),
    FrontSide(PassportElementErrorFrontSide),
    ReverseSide(PassportElementErrorReverseSide),
    Selfie(PassportElementErrorSelfie),
    File(PassportElementErrorFile),
    Files(PassportElementErrorFiles),
    TranslationFile(PassportElementErrorTranslationFile),
    TranslationFiles(PassportElementErrorTranslationFiles),
    Unspecified(PassportElementErrorUnspecified),
}

/// Represents an issue in one of the data fields that was provided by the user.
/// The error is considered resolved when the field's value changes.
/// https://core.telegram.org/bots/api#passportelementerrordatafield
#[derive(Debug, Deserialize, Serialize)]
pub struct PassportElementErrorDataField {
    pub source: CompactString,
    #[serde(rename = "type")]
    pub element_type: PassportElementType,
    pub field_name: CompactString,
    pub data_hash: CompactString,
    pub message: CompactString,
}

/// Represents an issue with the front side of a document.
/// https://core.telegram.org/bots/api#passportelementerrorfrontside
#[derive(Debug, Deserialize, Serialize)]
pub struct PassportElementErrorFrontSide {
    pub source: CompactString,
    #[serde(rename = "type")]
    pub element_type: PassportElementType,
    pub file_hash: CompactString,
    pub message: CompactString,
}

/// Represents an issue with the reverse side of a document.
/// https://core.telegram.org/bots/api#passportelementerrorreverseside
#[derive(Debug, Deserialize, Serialize)]
pub struct PassportElementErrorReverseSide {
    pub source: CompactString,
    #[serde(rename = "type")]
    pub element_type: PassportElementType,
    pub file_hash: CompactString,
    pub message: CompactString,
}

/// Represents an issue with the selfie with a document.
/// https://core.telegram.org/bots/api#passportelementerrorselfie
#[derive(Debug, Deserialize, Serialize)]
pub struct PassportElementErrorSelfie {
    pub source: CompactString,
    #[serde(rename = "type")]
    pub element_type: PassportElementType,
    pub file_hash: CompactString,
    pub message: CompactString,
}

/// Represents an issue with a document scan.
/// https://core.telegram.org/bots/api#passportelementerrorfile
#[derive(Debug, Deserialize, Serialize)]
pub struct PassportElementErrorFile {
    pub source: CompactString,
    #[serde(rename = "type")]
    pub element_type: PassportElementType,
    pub file_hash: CompactString,
    pub message: CompactString,
}

/// Represents an issue with a list of scans.
/// https://core.telegram.org/bots/api#passportelementerrorfiles
#[derive(Debug, Deserialize, Serialize)]
pub struct PassportElementErrorFiles {
    pub source: CompactString,
    #[serde(rename = "type")]
    pub element_type: PassportElementType,
    pub file_hashes: Vec<CompactString>,
    pub message: CompactString,
}

/// Represents an issue with one of the files that constitute the translation of a document.
/// https://core.telegram.org/bots/api#passportelementerrortranslationfile
#[derive(Debug, Deserialize, Serialize)]
pub struct PassportElementErrorTranslationFile {
    pub source: CompactString,
    #[serde(rename = "type")]
    pub element_type: PassportElementType,
    pub file_hash: CompactString,
    pub message: CompactString,
}

/// Represents an issue with the translated version of a document.
/// https://core.telegram.org/bots/api#passportelementerrortranslationfiles
#[derive(Debug, Deserialize, Serialize)]
pub struct PassportElementErrorTranslationFiles {
    pub source: CompactString,
    #[serde(rename = "type")]
    pub element_type: PassportElementType,
    pub file_hashes: Vec<CompactString>,
    pub message: CompactString,
}

/// Represents an issue in an unspecified place.
/// The error is considered resolved when new data is added.
/// https://core.telegram.org/bots/api#passportelementerrorunspecified
#[derive(Debug, Deserialize, Serialize)]
pub struct PassportElementErrorUnspecified {
    pub source: CompactString,
    #[serde(rename = "type")]
    pub element_type: PassportElementType,
    pub element_hash: CompactString,
    pub message: CompactString,
}
