use crate::{
    dto::user::UserDto,
    models::user::{Model as User, Role},
};

pub fn to_dto(user: User) -> UserDto {
    UserDto {
        user_id: Some(user.user_id),
        email: user.email,
        password: user.password,
        role: user.role.to_string(),
    }
}

pub fn to_entity(dto: &UserDto) -> Result<User, String> {
    Ok(User {
        user_id: dto.user_id.unwrap_or_default(),
        email: dto.email.clone(),
        password: dto.password.clone(),
        role: dto.role.parse::<Role>()?,
    })
}
