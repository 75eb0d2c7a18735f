//! Notifier port - desktop notification sink

/// Image tag attached to a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyImage {
    Success,
    Failed,
}

impl NotifyImage {
    pub fn from_outcome(succeeded: bool) -> Self {
        if succeeded {
            NotifyImage::Success
        } else {
            NotifyImage::Failed
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NotifyImage::Success => "success",
            NotifyImage::Failed => "failed",
        }
    }
}

/// Fire-and-forget notification sink
///
/// Implementations swallow delivery problems; an unavailable backend is a
/// no-op, not an error.
pub trait Notifier {
    fn notify(&self, message: &str, title: &str, image: NotifyImage);
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&self, message: &str, title: &str, image: NotifyImage) {
        (**self).notify(message, title, image)
    }
}

/// Notifier that drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str, _title: &str, _image: NotifyImage) {}
}
