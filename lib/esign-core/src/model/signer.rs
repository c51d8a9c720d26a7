use validator::Validate;

/// Recipient of an envelope; `id` becomes the platform's client user id and
/// marks the signer as embedded.
#[derive(Clone, Debug, PartialEq, Eq, Validate)]
pub struct SignerInfo {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}
