#[derive(Debug)]
pub struct InvalidCredentialsError;

impl std::fmt::Display for InvalidCredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The portal rejected the supplied credentials!")
    }
}

impl std::error::Error for InvalidCredentialsError {}
