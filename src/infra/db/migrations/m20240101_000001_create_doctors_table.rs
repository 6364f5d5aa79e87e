//! Migration: Create doctors table with unique email and CRM.

use sea_orm_migration::prelude::*;

use crate::config::{INDEX_DOCTORS_CRM, INDEX_DOCTORS_EMAIL};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Doctors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Doctors::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Doctors::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Doctors::Email).string_len(100).not_null())
                    .col(ColumnDef::new(Doctors::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Doctors::Specialty).string_len(100).not_null())
                    .col(ColumnDef::new(Doctors::Crm).string_len(100).not_null())
                    .col(ColumnDef::new(Doctors::Phone).string_len(100).not_null())
                    .col(ColumnDef::new(Doctors::AddressNeighborhood).string().null())
                    .col(ColumnDef::new(Doctors::AddressStreet).string().null())
                    .col(ColumnDef::new(Doctors::AddressNumber).string().null())
                    .col(ColumnDef::new(Doctors::AddressCity).string().null())
                    .col(ColumnDef::new(Doctors::AddressState).string().null())
                    .col(ColumnDef::new(Doctors::AddressZipCode).string().null())
                    .col(ColumnDef::new(Doctors::AddressComplement).string().null())
                    .col(
                        ColumnDef::new(Doctors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Doctors::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Index names are matched when translating insert violations
        manager
            .create_index(
                Index::create()
                    .name(INDEX_DOCTORS_EMAIL)
                    .table(Doctors::Table)
                    .col(Doctors::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(INDEX_DOCTORS_CRM)
                    .table(Doctors::Table)
                    .col(Doctors::Crm)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Indexes go with the table
        manager
            .drop_table(Table::drop().table(Doctors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Doctors {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Specialty,
    Crm,
    Phone,
    AddressNeighborhood,
    AddressStreet,
    AddressNumber,
    AddressCity,
    AddressState,
    AddressZipCode,
    AddressComplement,
    CreatedAt,
    UpdatedAt,
}
