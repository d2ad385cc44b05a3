use std::slice::Iter;

/// Profile data entered during registration.
///
/// All fields are free text. Construction validates that no field is empty;
/// there is no further parsing, trimming or range checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub height: String,
    pub weight: String,
    pub age: String,
}

impl UserProfile {
    pub fn new(
        name: &str,
        height: &str,
        weight: &str,
        age: &str,
    ) -> Result<Self, ProfileError> {
        Ok(Self {
            name: ProfileField::Name.validate(name)?,
            height: ProfileField::Height.validate(height)?,
            weight: ProfileField::Weight.validate(weight)?,
            age: ProfileField::Age.validate(age)?,
        })
    }

    /// The part of the name before the first space.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Height,
    Weight,
    Age,
}

impl ProfileField {
    pub fn iter() -> Iter<'static, ProfileField> {
        static FIELDS: [ProfileField; 4] = [
            ProfileField::Name,
            ProfileField::Height,
            ProfileField::Weight,
            ProfileField::Age,
        ];
        FIELDS.iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ProfileField::Name => "nombre completo",
            ProfileField::Height => "talla",
            ProfileField::Weight => "peso",
            ProfileField::Age => "edad",
        }
    }

    pub fn validate(self, value: &str) -> Result<String, ProfileError> {
        if value.is_empty() {
            return Err(ProfileError::Empty(self));
        }

        Ok(value.to_string())
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileError {
    #[error("El campo {} es obligatorio", .0.name())]
    Empty(ProfileField),
}
