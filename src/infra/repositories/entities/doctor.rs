//! Doctor database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Address, Doctor};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "doctors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub specialty: String,
    #[sea_orm(unique)]
    pub crm: String,
    pub phone: String,
    /// Embedded address; all columns are NULL when the doctor has none
    pub address_neighborhood: Option<String>,
    pub address_street: Option<String>,
    pub address_number: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip_code: Option<String>,
    pub address_complement: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Reassemble the embedded address, keyed on the street column
    fn address(&self) -> Option<Address> {
        let street = self.address_street.clone()?;
        Some(Address {
            neighborhood: self.address_neighborhood.clone().unwrap_or_default(),
            street,
            number: self.address_number.clone().unwrap_or_default(),
            city: self.address_city.clone().unwrap_or_default(),
            state: self.address_state.clone().unwrap_or_default(),
            zip_code: self.address_zip_code.clone().unwrap_or_default(),
            complement: self.address_complement.clone(),
        })
    }
}

/// Convert database model to domain entity
impl From<Model> for Doctor {
    fn from(model: Model) -> Self {
        let address = model.address();
        Doctor {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            specialty: model.specialty,
            crm: model.crm,
            phone: model.phone,
            address,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model() -> Model {
        let now = Utc::now();
        Model {
            id: Uuid::new_v4(),
            name: "Ana Souza".to_string(),
            email: "ana@x.com".to_string(),
            password_hash: "hash".to_string(),
            specialty: "Cardiology".to_string(),
            crm: "CRM123".to_string(),
            phone: "5551234".to_string(),
            address_neighborhood: None,
            address_street: None,
            address_number: None,
            address_city: None,
            address_state: None,
            address_zip_code: None,
            address_complement: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_model_without_address() {
        let doctor = Doctor::from(model());
        assert!(doctor.address.is_none());
        assert_eq!(doctor.crm, "CRM123");
    }

    #[test]
    fn test_model_with_address() {
        let mut m = model();
        m.address_neighborhood = Some("Centro".to_string());
        m.address_street = Some("Rua das Flores".to_string());
        m.address_number = Some("42".to_string());
        m.address_city = Some("São Paulo".to_string());
        m.address_state = Some("SP".to_string());
        m.address_zip_code = Some("01001-000".to_string());

        let address = Doctor::from(m).address.unwrap();
        assert_eq!(address.street, "Rua das Flores");
        assert_eq!(address.zip_code, "01001-000");
        assert!(address.complement.is_none());
    }
}
