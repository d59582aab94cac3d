use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::prelude::entity::MemberId;
use kernel::prelude::factory::LibraryFactory;
use kernel::KernelError;

use crate::transfer::{CreateMemberDto, DeleteMemberDto, GetMemberDto, MemberDto};

#[async_trait::async_trait]
pub trait GetMemberService: 'static + Sync + Send + DependOnDatabaseConnection {
    async fn get_member(
        &self,
        dto: GetMemberDto,
    ) -> error_stack::Result<Option<MemberDto>, KernelError> {
        let connection = self.database_connection().transact().await?;
        let member = connection.find_member(&MemberId::new(dto.id));
        Ok(member.map(MemberDto::from))
    }

    async fn get_all_members(&self) -> error_stack::Result<Vec<MemberDto>, KernelError> {
        let connection = self.database_connection().transact().await?;
        Ok(connection
            .members()
            .into_iter()
            .map(MemberDto::from)
            .collect())
    }
}

impl<T> GetMemberService for T where T: DependOnDatabaseConnection {}

#[async_trait::async_trait]
pub trait CreateMemberService: 'static + Sync + Send + DependOnDatabaseConnection {
    async fn create_member(
        &self,
        dto: CreateMemberDto,
    ) -> error_stack::Result<MemberDto, KernelError> {
        let member = LibraryFactory.create_member(dto.name.trim(), dto.id)?;
        let created = MemberDto::from(member.clone());

        let mut connection = self.database_connection().transact().await?;
        connection.add_member(member)?;
        tracing::info!(id = created.id, member_name = %created.name, "member added");

        Ok(created)
    }
}

impl<T> CreateMemberService for T where T: DependOnDatabaseConnection {}

#[async_trait::async_trait]
pub trait DeleteMemberService: 'static + Sync + Send + DependOnDatabaseConnection {
    async fn delete_member(
        &self,
        dto: DeleteMemberDto,
    ) -> error_stack::Result<MemberDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = MemberId::new(dto.id);
        let removed = connection.remove_member(&id).ok_or_else(|| {
            Report::new(KernelError::NotFound).attach_printable(format!("No member with ID {id}."))
        })?;
        tracing::info!(%id, "member removed");

        Ok(MemberDto::from(removed))
    }
}

impl<T> DeleteMemberService for T where T: DependOnDatabaseConnection {}

#[cfg(test)]
mod test {
    use driver::database::InMemoryDatabase;
    use kernel::KernelError;

    use crate::service::{CreateMemberService, DeleteMemberService, GetMemberService};
    use crate::transfer::{CreateMemberDto, DeleteMemberDto, GetMemberDto, MemberDto};

    fn member(name: &str, id: i32) -> CreateMemberDto {
        CreateMemberDto {
            name: name.to_string(),
            id,
        }
    }

    #[tokio::test]
    async fn create_get_and_delete() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let created = db.create_member(member("Alice", 1)).await?;
        assert_eq!(
            created,
            MemberDto {
                id: 1,
                name: "Alice".to_string()
            }
        );
        assert_eq!(
            db.get_member(GetMemberDto { id: 1 }).await?,
            Some(created.clone())
        );

        db.delete_member(DeleteMemberDto { id: 1 }).await?;
        assert!(db.get_all_members().await?.is_empty());

        let again = db.delete_member(DeleteMemberDto { id: 1 }).await;
        assert_eq!(
            again.err().map(|report| *report.current_context()),
            Some(KernelError::NotFound)
        );
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_id_leaves_members_unchanged() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        db.create_member(member("Alice", 1)).await?;

        let duplicate = db.create_member(member("Bob", 1)).await;
        assert_eq!(
            duplicate.err().map(|report| *report.current_context()),
            Some(KernelError::UniquenessViolation)
        );

        let members = db.get_all_members().await?;
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Alice");
        Ok(())
    }

    #[tokio::test]
    async fn non_positive_id_is_rejected() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        for id in [0, -1] {
            let result = db.create_member(member("Name", id)).await;
            assert_eq!(
                result.err().map(|report| *report.current_context()),
                Some(KernelError::InvalidArgument)
            );
        }
        assert!(db.get_all_members().await?.is_empty());
        Ok(())
    }
}
