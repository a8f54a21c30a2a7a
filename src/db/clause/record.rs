//! Records of learnt clauses, for diagnostics.
//!
//! When enabled by the [learnt_stats](crate::config::dbs::ClauseDBConfig::learnt_stats) option a record is made of each learnt clause when the clause is stored.
//! The record is completed with the raw activity of the clause when the clause is removed, and passed to the callback set with [set_callback_learnt_record](crate::db::clause::ClauseDB::set_callback_learnt_record).
//!
//! A record displays as comma separated values: `id,size,levels[,literals],activity`.

/// A record of a learnt clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearntRecord {
    /// The id of the clause.
    pub id: u64,

    /// The size of the clause when stored.
    pub size: usize,

    /// A count of distinct levels among the literals of the clause when stored.
    pub levels: usize,

    /// The literals of the clause, if requested.
    pub literals: Option<String>,

    /// The count of bumps to the clause, noted on removal.
    pub activity: u32,
}

impl std::fmt::Display for LearntRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.id, self.size, self.levels)?;
        if let Some(literals) = &self.literals {
            write!(f, ",{literals}")?;
        }
        write!(f, ",{}", self.activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let mut record = LearntRecord {
            id: 7,
            size: 3,
            levels: 2,
            literals: None,
            activity: 4,
        };
        assert_eq!(record.to_string(), "7,3,2,4");

        record.literals = Some("x y -z".to_string());
        assert_eq!(record.to_string(), "7,3,2,x y -z,4");
    }
}
