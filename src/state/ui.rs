#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Page chrome state: the image lightbox.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Full-resolution source shown in the image modal, `None` when closed.
    pub modal_image: Option<String>,
}

impl UiState {
    pub fn open_image(&mut self, src: String) {
        self.modal_image = Some(src);
    }

    /// Close the modal and drop the loaded source.
    pub fn close_image(&mut self) {
        self.modal_image = None;
    }

    pub fn modal_open(&self) -> bool {
        self.modal_image.is_some()
    }
}
