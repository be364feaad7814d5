//! Multipart bodies of the upload-carrying requests.
//!
//! Each builder enumerates its fields explicitly into a [`FormFields`] list,
//! which is then turned into a reqwest form. Keeping the intermediate list
//! plain data lets the field layout be inspected without a server.

use collart_core::auth::Registration;
use collart_core::chat::OutgoingMessage;
use collart_core::error::{CollartError, Result};
use collart_core::order::NewOrder;
use collart_core::portfolio::NewPortfolioProject;
use collart_core::upload::UploadFile;
use collart_core::user::ProfileUpdate;
use collart_infrastructure::guess_mime_type;
use reqwest::multipart::{Form, Part};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    File(UploadFile),
}

/// Ordered multipart fields; names may repeat for list values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    fields: Vec<(String, FieldValue)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields
            .push((name.to_string(), FieldValue::Text(value.into())));
        self
    }

    pub fn texts<'a>(mut self, name: &str, values: impl IntoIterator<Item = &'a String>) -> Self {
        for value in values {
            self = self.text(name, value.as_str());
        }
        self
    }

    pub fn file(mut self, name: &str, file: &UploadFile) -> Self {
        self.fields
            .push((name.to_string(), FieldValue::File(file.clone())));
        self
    }

    pub fn optional_file(self, name: &str, file: Option<&UploadFile>) -> Self {
        match file {
            Some(file) => self.file(name, file),
            None => self,
        }
    }

    pub fn files(mut self, name: &str, files: &[UploadFile]) -> Self {
        for file in files {
            self = self.file(name, file);
        }
        self
    }

    /// Text value of the first field called `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(field, value)| match value {
            FieldValue::Text(text) if field == name => Some(text.as_str()),
            _ => None,
        })
    }

    /// Every text value of the fields called `name`.
    pub fn text_values(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter_map(|(field, value)| match value {
                FieldValue::Text(text) if field == name => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// File names attached under `name`.
    pub fn file_names(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter_map(|(field, value)| match value {
                FieldValue::File(file) if field == name => Some(file.file_name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_form(self) -> Result<Form> {
        self.fields
            .into_iter()
            .try_fold(Form::new(), |form, (name, value)| match value {
                FieldValue::Text(text) => Ok(form.text(name, text)),
                FieldValue::File(file) => Ok(form.part(name, file_part(file)?)),
            })
    }
}

fn file_part(file: UploadFile) -> Result<Part> {
    let mime = file
        .mime_type
        .clone()
        .unwrap_or_else(|| guess_mime_type(&file.file_name));
    Part::bytes(file.bytes)
        .file_name(file.file_name)
        .mime_str(&mime)
        .map_err(|err| CollartError::internal(format!("Invalid MIME type '{mime}': {err}")))
}

fn flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

pub fn registration_fields(registration: &Registration) -> FormFields {
    FormFields::new()
        .text("email", registration.email.as_str())
        .text("password", registration.password.as_str())
        .text("confirmPassword", registration.confirm_password.as_str())
        .text("name", registration.name.as_str())
        .text("surname", registration.surname.as_str())
        .text("description", registration.description.as_str())
        .text("searchable", flag(registration.searchable))
        .text("experience", registration.experience.raw_value())
        .texts("tools[]", &registration.tools)
        .text("primarySkill", registration.profession.as_str())
        .texts("skills[]", &registration.sub_professions)
        .optional_file("userPhoto", registration.avatar.as_ref())
        .optional_file("cover", registration.cover.as_ref())
}

pub fn profile_fields(update: &ProfileUpdate) -> FormFields {
    FormFields::new()
        .text("name", update.name.as_str())
        .text("surname", update.surname.as_str())
        .text("description", update.description.as_str())
        .text("searchable", flag(update.searchable))
        .text("experience", update.experience.raw_value())
        .texts("tools[]", &update.tools)
        .text("primarySkill", update.profession.as_str())
        .texts("skills[]", &update.sub_professions)
        .optional_file("userPhoto", update.avatar.as_ref())
        .optional_file("cover", update.cover.as_ref())
}

pub fn order_fields(order: &NewOrder) -> FormFields {
    FormFields::new()
        .text("title", order.title.as_str())
        .text("skill", order.skill_id.as_str())
        .text("taskDescription", order.task_description.as_str())
        .text("projectDescription", order.project_description.as_str())
        .text("experience", order.experience.raw_value())
        .texts("tools[]", &order.tools)
        .text("startTime", order.start_time.to_rfc3339())
        .text("endTime", order.end_time.to_rfc3339())
        .file("image", &order.image)
        .files("files[]", &order.files)
}

pub fn portfolio_fields(project: &NewPortfolioProject) -> FormFields {
    FormFields::new()
        .text("name", project.name.as_str())
        .text("description", project.description.as_str())
        .file("image", &project.image)
        .files("files[]", &project.files)
}

pub fn message_fields(message: &OutgoingMessage) -> FormFields {
    FormFields::new()
        .text("receiverID", message.receiver_id.as_str())
        .text("message", message.text.as_str())
        .files("files[]", &message.files)
}
