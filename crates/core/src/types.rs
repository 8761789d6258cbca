/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Salaries are whole currency units.
pub type Salary = i64;
