//! Member registry store

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::file::{read_document, write_document, FORMAT_VERSION};
use super::MemberMap;
use crate::{error::StorageError, models::Member};

#[derive(Debug, Serialize, Deserialize)]
struct MemberRecord {
    member_id: String,
    name: String,
    email: String,
    phone: String,
    #[serde(default)]
    borrowed_books: IndexSet<String>,
    membership_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
struct MembersDocument {
    version: u32,
    members: Vec<MemberRecord>,
}

impl From<&Member> for MemberRecord {
    fn from(member: &Member) -> Self {
        Self {
            member_id: member.member_id.clone(),
            name: member.name.clone(),
            email: member.email.clone(),
            phone: member.phone.clone(),
            borrowed_books: member.borrowed_books.clone(),
            membership_date: member.membership_date,
        }
    }
}

impl From<MemberRecord> for Member {
    fn from(record: MemberRecord) -> Self {
        Self {
            member_id: record.member_id,
            name: record.name,
            email: record.email,
            phone: record.phone,
            borrowed_books: record.borrowed_books,
            membership_date: record.membership_date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MembersFile {
    path: PathBuf,
}

impl MembersFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the registry; `Ok(None)` when no registry was saved yet
    pub fn load(&self) -> Result<Option<MemberMap>, StorageError> {
        let Some(document) = read_document::<MembersDocument>(&self.path)? else {
            return Ok(None);
        };

        let mut members = MemberMap::with_capacity(document.members.len());
        for record in document.members {
            if members.contains_key(&record.member_id) {
                return Err(StorageError::InvalidRecord {
                    path: self.path.clone(),
                    message: format!("duplicate member ID {}", record.member_id),
                });
            }
            members.insert(record.member_id.clone(), Member::from(record));
        }
        Ok(Some(members))
    }

    pub fn save(&self, members: &MemberMap) -> Result<(), StorageError> {
        let document = MembersDocument {
            version: FORMAT_VERSION,
            members: members.values().map(MemberRecord::from).collect(),
        };
        write_document(&self.path, &document)
    }
}
