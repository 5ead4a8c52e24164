use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::BoxFuture;
use person_registry::{
    NewPerson, PersonApi, PersonRecord, RegistryError, RegistrationForm, Result, form::Field,
};

/// Canned answer of the in-memory API
#[derive(Debug, Clone)]
pub enum Reply {
    Ok,
    Status(u16, &'static str),
}

/// In-memory `PersonApi` that records every call
#[derive(Debug)]
pub struct FakePersonApi {
    records: Vec<PersonRecord>,
    list_reply: Reply,
    create_reply: Reply,
    pub list_calls: AtomicUsize,
    pub created: Mutex<Vec<NewPerson>>,
}

impl FakePersonApi {
    #[must_use]
    pub fn with_records(records: Vec<PersonRecord>) -> Self {
        Self {
            records,
            list_reply: Reply::Ok,
            create_reply: Reply::Ok,
            list_calls: AtomicUsize::new(0),
            created: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::with_records(Vec::new())
    }

    #[must_use]
    pub fn failing_list(mut self, status: u16, message: &'static str) -> Self {
        self.list_reply = Reply::Status(status, message);
        self
    }

    #[must_use]
    pub fn failing_create(mut self, status: u16, message: &'static str) -> Self {
        self.create_reply = Reply::Status(status, message);
        self
    }

    pub fn list_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }
}

fn answer(reply: &Reply) -> Result<()> {
    match reply {
        Reply::Ok => Ok(()),
        Reply::Status(status, message) => Err(RegistryError::Api {
            status: *status,
            message: (*message).to_string(),
        }),
    }
}

impl PersonApi for FakePersonApi {
    fn list_persons(&self) -> BoxFuture<'_, Result<Vec<PersonRecord>>> {
        Box::pin(async move {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            answer(&self.list_reply)?;
            Ok(self.records.clone())
        })
    }

    fn create_person<'a>(&'a self, person: &'a NewPerson) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            self.created.lock().unwrap().push(person.clone());
            answer(&self.create_reply)
        })
    }
}

/// A record with the given id and name and nothing else
#[must_use]
pub fn person(id: usize, name: &str) -> PersonRecord {
    PersonRecord {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        ..Default::default()
    }
}

/// The smallest form that passes validation
#[must_use]
pub fn valid_form() -> RegistrationForm {
    RegistrationForm::new()
        .with(Field::Name, "Asha Rao")
        .with(Field::Age, "30")
        .with(Field::Gender, "female")
}
