use std::collections::hash_map::Entry;
use std::collections::HashMap;

use error_stack::Report;
use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{User, UserId};
use kernel::KernelError;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: HashMap<UserId, User>,
}

impl UserQuery for InMemoryUserRepository {
    fn find_by_id(&self, id: &UserId) -> error_stack::Result<Option<User>, KernelError> {
        Ok(self.users.get(id).cloned())
    }

    fn find_all(&self) -> error_stack::Result<Vec<User>, KernelError> {
        Ok(self.users.values().cloned().collect())
    }
}

impl UserModifier for InMemoryUserRepository {
    fn create(&mut self, user: User) -> error_stack::Result<(), KernelError> {
        match self.users.entry(user.id().clone()) {
            Entry::Occupied(entry) => Err(Report::new(KernelError::AlreadyExists)
                .attach_printable(format!("User {} already exists", entry.key()))),
            Entry::Vacant(entry) => {
                entry.insert(user);
                Ok(())
            }
        }
    }

    fn update(&mut self, user: User) -> error_stack::Result<(), KernelError> {
        let Some(stored) = self.users.get_mut(user.id()) else {
            return Err(not_found(user.id()));
        };
        *stored = user;
        Ok(())
    }

    fn delete(&mut self, id: &UserId) -> error_stack::Result<(), KernelError> {
        match self.users.remove(id) {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        }
    }
}

fn not_found(id: &UserId) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("User {id} not found"))
}

#[cfg(test)]
mod test {
    use kernel::interface::query::UserQuery;
    use kernel::interface::update::UserModifier;
    use kernel::prelude::entity::{User, UserId, UserName, UserPhone, UserSurname};
    use kernel::KernelError;

    use crate::database::memory::user::InMemoryUserRepository;

    #[test]
    fn test() -> error_stack::Result<(), KernelError> {
        let mut repository = InMemoryUserRepository::default();
        let id = UserId::generate();
        let user = User::new(
            id.clone(),
            UserName::new("Victoria"),
            UserSurname::new("Shilova"),
            UserPhone::new(79005830462_i64),
        );

        repository.create(user.clone())?;
        assert_eq!(repository.find_by_id(&id)?, Some(user.clone()));

        let report = repository.create(user.clone()).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::AlreadyExists);

        let user = user.reconstruct(|u| u.phone = UserPhone::new(79042600861_i64));
        repository.update(user.clone())?;
        assert_eq!(repository.find_all()?, vec![user]);

        repository.delete(&id)?;
        assert!(repository.find_by_id(&id)?.is_none());

        let report = repository.delete(&id).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::NotFound);

        Ok(())
    }
}
