//! Member registry management

use super::Library;
use crate::{
    error::{AppError, AppResult, StateViolation},
    models::{Book, Member, UpdateMember},
};

impl Library {
    /// Register a member; membership starts today
    pub fn add_member(
        &mut self,
        member_id: &str,
        name: &str,
        email: &str,
        phone: &str,
    ) -> AppResult<Member> {
        if self.members.contains_key(member_id) {
            tracing::warn!("Member add rejected: ID {} already exists", member_id);
            return Err(AppError::Conflict(format!(
                "Member with ID {} already exists",
                member_id
            )));
        }

        let member = Member::new(member_id, name, email, phone, self.today());
        self.members.insert(member_id.to_string(), member.clone());
        self.save();

        tracing::info!("Member add: ID {} ({})", member_id, name);
        Ok(member)
    }

    /// Remove a member holding no books
    pub fn remove_member(&mut self, member_id: &str) -> AppResult<Member> {
        let member = self
            .members
            .get(member_id)
            .ok_or_else(|| AppError::MemberNotFound(member_id.to_string()))?;

        if member.has_loans() {
            tracing::warn!(
                "Member remove rejected: ID {} holds {} books",
                member_id,
                member.loan_count()
            );
            return Err(AppError::InvalidState(StateViolation::MemberHasLoans));
        }

        let removed = self
            .members
            .shift_remove(member_id)
            .ok_or_else(|| AppError::MemberNotFound(member_id.to_string()))?;
        self.save();

        tracing::info!("Member remove: ID {}", member_id);
        Ok(removed)
    }

    /// Change name, email and/or phone
    pub fn update_member_contact(
        &mut self,
        member_id: &str,
        update: UpdateMember,
    ) -> AppResult<Member> {
        let member = self
            .members
            .get_mut(member_id)
            .ok_or_else(|| AppError::MemberNotFound(member_id.to_string()))?;

        member.apply(update);
        let updated = member.clone();
        self.save();

        tracing::info!("Member update: ID {}", member_id);
        Ok(updated)
    }

    pub fn list_members(&self) -> Vec<Member> {
        self.members.values().cloned().collect()
    }

    pub fn get_member(&self, member_id: &str) -> AppResult<Member> {
        self.members
            .get(member_id)
            .cloned()
            .ok_or_else(|| AppError::MemberNotFound(member_id.to_string()))
    }

    /// Books currently held by a member
    pub fn member_loans(&self, member_id: &str) -> AppResult<Vec<Book>> {
        let member = self
            .members
            .get(member_id)
            .ok_or_else(|| AppError::MemberNotFound(member_id.to_string()))?;

        Ok(member
            .borrowed_books
            .iter()
            .filter_map(|isbn| self.books.get(isbn))
            .cloned()
            .collect())
    }
}
