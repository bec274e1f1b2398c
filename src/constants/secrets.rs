//! Reading credentials mounted as Docker secrets.
use std::fs::File;
use std::io::Read;
use std::path::Path;

const DOCKER_SECRETS_PATH: &str = "/run/secrets/";

/// Read a named secret from the Docker secrets mount. Trailing whitespace is
/// stripped, since secret files commonly end with a newline.
pub fn read_secret(name: &str) -> Result<String, std::io::Error> {
    let mut secret_val = String::new();
    File::open(Path::new(DOCKER_SECRETS_PATH).join(name.to_lowercase()))?
        .read_to_string(&mut secret_val)?;
    Ok(secret_val.trim_end().to_owned())
}
