use account_association_sdk::{AccountIdentity, AssociationKey};

use super::entity::Model as AssociationEntity;

/// Convert a database entity to the identity it stores
impl From<AssociationEntity> for AccountIdentity {
    fn from(e: AssociationEntity) -> Self {
        Self {
            tenant_id: e.tenant_id,
            domain: e.domain_name,
            username: e.user_name,
        }
    }
}

impl From<&AssociationEntity> for AssociationKey {
    fn from(e: &AssociationEntity) -> Self {
        AssociationKey::new(e.association_key.clone())
    }
}
