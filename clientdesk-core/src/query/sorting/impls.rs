//! [`SortableEntity`] implementations for the record types in
//! `clientdesk-model`.

use super::{fields::SortField, keys::SortKey, traits::SortableEntity};
use clientdesk_model::ClientRecord;

impl SortableEntity for ClientRecord {
    fn sort_key(&self, field: SortField) -> Option<SortKey<'_>> {
        match field {
            SortField::ClientId => Some(SortKey::Id(self.id.get())),
            SortField::ClientName => Some(SortKey::Text(&self.name)),
            SortField::ClientType => Some(SortKey::Text(self.client_type.as_str())),
            SortField::Email => Some(SortKey::Text(&self.email)),
            SortField::Status => Some(SortKey::Text(self.status.as_str())),
            SortField::CreatedAt => Some(SortKey::Date(self.created_at)),
            SortField::UpdatedAt => self.updated_at.map(SortKey::Date),
            SortField::UpdatedBy => self.updated_by.as_deref().map(SortKey::Text),
        }
    }
}
