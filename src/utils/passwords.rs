//! Temporary password generation for provisioned accounts.

/// The literal prefix of every generated temporary password.
const TEMP_PASSWORD_PREFIX: &str = "ytrewards";

/// Generate a secure but readable temporary password: the fixed prefix
/// followed by a random four digit number.
pub fn generate_temporary() -> String {
    let mut buf: [u8; 2] = [0; 2];
    getrandom::fill(&mut buf).expect("Error getting OS random while generating a password.");
    let number = 1000 + u32::from(u16::from_le_bytes(buf)) % 9000;
    format!("{TEMP_PASSWORD_PREFIX}{number}")
}
