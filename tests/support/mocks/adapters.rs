// tests/support/mocks/adapters.rs
use async_trait::async_trait;
use eijafilm::application::{
    ApplicationResult,
    ports::{
        mail::{Mailer, PasswordResetMail},
        storage::{MediaStorage, MediaUpload},
    },
};
use std::sync::Mutex;

#[derive(Default)]
pub struct CapturingMailer {
    sent: Mutex<Vec<PasswordResetMail>>,
}

impl CapturingMailer {
    pub fn sent(&self) -> Vec<PasswordResetMail> {
        self.sent.lock().unwrap().clone()
    }

    /// Token carried by the most recent reset link.
    pub fn last_token(&self) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .last()
            .and_then(|mail| mail.reset_link.split("token=").nth(1).map(str::to_string))
    }
}

#[async_trait]
impl Mailer for CapturingMailer {
    async fn send_password_reset(&self, mail: PasswordResetMail) -> ApplicationResult<()> {
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    stored: Mutex<Vec<MediaUpload>>,
}

impl MemoryStorage {
    pub fn count(&self) -> usize {
        self.stored.lock().unwrap().len()
    }
}

#[async_trait]
impl MediaStorage for MemoryStorage {
    async fn store(&self, upload: MediaUpload) -> ApplicationResult<String> {
        let mut stored = self.stored.lock().unwrap();
        stored.push(upload);
        Ok(format!("http://media.test/uploads/{}", stored.len()))
    }
}
