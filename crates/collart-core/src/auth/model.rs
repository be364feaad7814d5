use crate::experience::Experience;
use crate::upload::UploadFile;

/// Email and password as typed on the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Sign-up form, sent as multipart together with the optional images.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub surname: String,
    pub description: String,
    pub searchable: bool,
    pub experience: Experience,
    pub tools: Vec<String>,
    /// Skill name of the primary profession.
    pub profession: String,
    pub sub_professions: Vec<String>,
    pub avatar: Option<UploadFile>,
    pub cover: Option<UploadFile>,
}
