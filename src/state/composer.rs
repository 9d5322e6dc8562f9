#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use crate::config::UiConfig;

/// A file picked in the composer, with its preview object URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub mime: String,
    pub size: u64,
    /// Object URL for the thumbnail; only set for `image/*` files.
    pub preview_url: Option<String>,
}

impl Attachment {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Reasons the composer refuses a submission or an attachment.
///
/// The display text is what the user is alerted with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposerError {
    #[error("Please enter a query or upload an image.")]
    Empty,
    #[error("Only image uploads are allowed ({name} is not an image file).")]
    UnsupportedFile { name: String },
    #[error("Image too large. Max {max_mb}MB.")]
    TooLarge { max_mb: u64 },
}

/// What gets sent for a valid submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// Trimmed query, `None` when blank.
    pub query: Option<String>,
    pub attachment_name: Option<String>,
}

/// Text input and attachment currently in the composer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub text: String,
    pub attachment: Option<Attachment>,
}

impl ComposerState {
    /// Validate the current contents into a [`Submission`].
    ///
    /// # Errors
    ///
    /// Returns [`ComposerError::Empty`] when the trimmed text is empty and no
    /// file is attached.
    pub fn prepare(&self) -> Result<Submission, ComposerError> {
        let query = Some(self.text.trim()).filter(|q| !q.is_empty()).map(str::to_owned);
        let attachment_name = self.attachment.as_ref().map(|a| a.name.clone());
        if query.is_none() && attachment_name.is_none() {
            return Err(ComposerError::Empty);
        }
        Ok(Submission { query, attachment_name })
    }

    /// Replace the attachment, returning the previous one so its preview URL
    /// can be released.
    pub fn attach(&mut self, attachment: Attachment) -> Option<Attachment> {
        self.attachment.replace(attachment)
    }

    pub fn detach(&mut self) -> Option<Attachment> {
        self.attachment.take()
    }

    /// Empty the composer, returning the dropped attachment.
    pub fn clear(&mut self) -> Option<Attachment> {
        self.text.clear();
        self.attachment.take()
    }

    /// Height cap for the text input; smaller while the preview strip shows.
    pub fn max_input_height(&self, config: &UiConfig) -> u32 {
        if self.attachment.is_some() { config.max_input_height_with_attachment } else { config.max_input_height }
    }
}

/// Check a picked file against the upload whitelist and size limit.
///
/// # Errors
///
/// Returns an error if the extension is not whitelisted or the file exceeds
/// the configured maximum.
pub fn check_attachment(name: &str, size: u64, config: &UiConfig) -> Result<(), ComposerError> {
    if !config.accepts_extension(name) {
        return Err(ComposerError::UnsupportedFile { name: name.to_owned() });
    }
    if size > config.max_upload_bytes {
        return Err(ComposerError::TooLarge { max_mb: config.max_upload_bytes / (1024 * 1024) });
    }
    Ok(())
}

/// Resolved text input size after an auto-resize pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputSize {
    pub height: u32,
    /// Whether content overflows and the input should scroll.
    pub scrolls: bool,
}

/// Fit the input to its content height, capped at `max_height`.
pub fn fit_input_height(content_height: u32, max_height: u32) -> InputSize {
    if content_height > max_height {
        InputSize { height: max_height, scrolls: true }
    } else {
        InputSize { height: content_height, scrolls: false }
    }
}

/// Enter submits; Shift+Enter inserts a newline.
pub fn is_submit_key(key: &str, shift_held: bool) -> bool {
    key == "Enter" && !shift_held
}
