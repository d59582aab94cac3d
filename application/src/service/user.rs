use error_stack::{Report, ResultExt};

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::prelude::entity::{MemberId, Role, User, UserExternalId, UserName};
use kernel::prelude::factory::LibraryFactory;
use kernel::KernelError;

use crate::transfer::{LoginDto, UserDto};

#[async_trait::async_trait]
pub trait LoginService: 'static + Sync + Send + DependOnDatabaseConnection {
    /// Decides the role from the identifier and records the login.
    ///
    /// A member identifier seen for the first time registers a new member
    /// under the given name; a known one must come with the member's name.
    async fn login(&self, dto: LoginDto) -> error_stack::Result<UserDto, KernelError> {
        let name = dto.name.trim();
        let external_id = dto.external_id.trim();
        if name.is_empty() || external_id.is_empty() {
            return Err(Report::new(KernelError::InvalidArgument)
                .attach_printable("Both name and ID must be provided."));
        }

        let user = User::new(UserName::new(name), UserExternalId::new(external_id));
        let mut connection = self.database_connection().transact().await?;

        if user.role() == &Role::Member {
            let id = external_id
                .parse::<i32>()
                .change_context(KernelError::InvalidArgument)
                .attach_printable("Invalid user ID format.")?;
            match connection.find_member(&MemberId::new(id)) {
                Some(member) => {
                    let registered: &String = member.name().as_ref();
                    if registered != name {
                        return Err(Report::new(KernelError::InvalidArgument)
                            .attach_printable("Member name does not match the ID."));
                    }
                }
                None => {
                    connection.add_member(LibraryFactory.create_member(name, id)?)?;
                    tracing::info!(id, member_name = name, "member registered at login");
                }
            }
        }

        connection.add_user(user.clone());
        tracing::info!(user = %user, role = %user.role(), "logged in");

        Ok(UserDto::from(user))
    }
}

impl<T> LoginService for T where T: DependOnDatabaseConnection {}

#[async_trait::async_trait]
pub trait GetUserService: 'static + Sync + Send + DependOnDatabaseConnection {
    async fn get_all_users(&self) -> error_stack::Result<Vec<UserDto>, KernelError> {
        let connection = self.database_connection().transact().await?;
        Ok(connection.users().into_iter().map(UserDto::from).collect())
    }
}

impl<T> GetUserService for T where T: DependOnDatabaseConnection {}
