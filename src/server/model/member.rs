//! Member domain models and parameters.
//!
//! Provides the `Member` model with its embedded `Address`, plus the parameter types
//! used for signup and renaming.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::member::{
    AddressDto, CreateMemberDto, MemberDto, MemberFormDto, UpdateMemberResponseDto,
};

/// Postal address embedded in members and deliveries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub city: String,
    pub street: String,
    pub zipcode: String,
}

impl Address {
    pub fn new(
        city: impl Into<String>,
        street: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            zipcode: zipcode.into(),
        }
    }

    /// Rebuilds an address from its nullable columns.
    ///
    /// The address only exists when all three columns are present.
    pub fn from_columns(
        city: Option<String>,
        street: Option<String>,
        zipcode: Option<String>,
    ) -> Option<Self> {
        match (city, street, zipcode) {
            (Some(city), Some(street), Some(zipcode)) => Some(Self {
                city,
                street,
                zipcode,
            }),
            _ => None,
        }
    }

    /// Splits an optional address into its `(city, street, zipcode)` columns.
    pub fn into_columns(
        address: Option<Self>,
    ) -> (Option<String>, Option<String>, Option<String>) {
        match address {
            Some(address) => (
                Some(address.city),
                Some(address.street),
                Some(address.zipcode),
            ),
            None => (None, None, None),
        }
    }

    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            city: self.city,
            street: self.street,
            zipcode: self.zipcode,
        }
    }
}

/// Registered shop member.
///
/// Member names are unique. Serializable so the v1 endpoints can bind and return
/// it without a dedicated DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Member {
    /// Ignored when the model is bound from a request body.
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub address: Option<Address>,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: Address::from_columns(entity.city, entity.street, entity.zipcode),
        }
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto { name: self.name }
    }

    pub fn into_update_response_dto(self) -> UpdateMemberResponseDto {
        UpdateMemberResponseDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for registering a member.
#[derive(Debug, Clone)]
pub struct CreateMemberParam {
    pub name: String,
    pub address: Option<Address>,
}

impl CreateMemberParam {
    pub fn from_dto(dto: CreateMemberDto) -> Self {
        Self {
            name: dto.name,
            address: None,
        }
    }

    /// Builds signup parameters from a member bound directly from a request body.
    ///
    /// Any id supplied by the client is discarded.
    pub fn from_member(member: Member) -> Self {
        Self {
            name: member.name,
            address: member.address,
        }
    }

    /// Builds signup parameters from the registration form.
    ///
    /// The address is omitted when every address field was left blank.
    pub fn from_form(form: MemberFormDto) -> Self {
        let address = if form.city.trim().is_empty()
            && form.street.trim().is_empty()
            && form.zipcode.trim().is_empty()
        {
            None
        } else {
            Some(Address::new(form.city, form.street, form.zipcode))
        };

        Self {
            name: form.name,
            address,
        }
    }
}

/// Parameters for renaming a member.
#[derive(Debug, Clone)]
pub struct UpdateMemberParam {
    pub id: i32,
    pub name: String,
}
