/*!
Channels between atoms and the finite-domain layer built over a context.

Some atoms stand for a fact about a finite-domain variable, e.g. that *x* = 3, or that *x* ≤ 3.
When such an atom is valued, the variable which owns the atom is told, so the two representations of the fact agree.
The owner of an atom, and the fact it stands for, are recorded as [ChannelInfo] in the [atom database](crate::db::atom).

Propagators do not own facts in the same way.
Instead, a propagator places a [wake-up token](crate::db::watches::Watch::Propagator) on the watch list of a literal, and the token is forwarded to the propagator during [propagation](crate::procedures::bcp).

Each collaborator is a trait object registered with a [Channels] registry under an id.
The id is the value stored in [Owner], and so dispatch is a lookup followed by a call.

```rust
# use otter_lcg::channel::{DomainVariable, ValueType};
# use otter_lcg::context::Context;
# use otter_lcg::config::Config;
struct Ignore;

impl DomainVariable for Ignore {
    fn channel(&mut self, _value: i32, _value_type: ValueType, _polarity: bool) {}
}

let mut ctx = Context::from_config(Config::default());
let id = ctx.channels.register_variable(Box::new(Ignore));
assert_eq!(id, 0);
```
*/

use crate::{db::LevelIndex, misc::log::targets};

/// The id of a finite-domain variable in a [Channels] registry.
pub type VariableId = u32;

/// The id of a propagator in a [Channels] registry.
pub type PropagatorId = u32;

/// The owner of an atom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Owner {
    /// The atom is not owned.
    #[default]
    None,

    /// The atom stands for a fact about a finite-domain variable.
    Variable(VariableId),

    /// The atom was made for a propagator.
    Propagator(PropagatorId),
}

/// The form of a fact about a finite-domain variable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueType {
    /// The variable is equal to the value.
    #[default]
    Equal,

    /// The variable is at most the value.
    LessEq,
}

/// The fact an atom stands for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChannelInfo {
    pub owner: Owner,
    pub value_type: ValueType,

    /// The value, interpreted by the owner.
    pub value: i32,
}

impl ChannelInfo {
    /// Info for an atom owned by the variable `id`.
    pub fn variable(id: VariableId, value_type: ValueType, value: i32) -> Self {
        ChannelInfo {
            owner: Owner::Variable(id),
            value_type,
            value,
        }
    }

    /// Info for an atom owned by the propagator `id`.
    pub fn propagator(id: PropagatorId, value: i32) -> Self {
        ChannelInfo {
            owner: Owner::Propagator(id),
            value_type: ValueType::Equal,
            value,
        }
    }

    /// The same info, with value advanced by `offset`.
    pub fn offset(&self, offset: i32) -> Self {
        ChannelInfo {
            value: self.value + offset,
            ..*self
        }
    }
}

/// A finite-domain variable, which owns some atoms.
pub trait DomainVariable {
    /// Notice of a literal on an owned atom becoming true.
    ///
    /// The fact is `value` under `value_type`, asserted if `polarity` is true and denied otherwise.
    fn channel(&mut self, value: i32, value_type: ValueType, polarity: bool);

    /// Notice of a backjump to `level`.
    fn backtrack(&mut self, _level: LevelIndex) {}

    /// Notice that the lazy atom for `value` has been released.
    fn free_lazy_var(&mut self, _value: i32) {}
}

/// A propagator, woken through tokens on watch lists.
pub trait Propagator {
    /// Notice of the literal watched with `data` becoming true.
    fn wakeup(&mut self, data: u32, event: u32);

    /// Notice that the lazy atom for `value` has been released.
    fn free_lazy_var(&mut self, _value: i32) {}

    /// Notice of a backjump to `level`.
    fn backtrack(&mut self, _level: LevelIndex) {}
}

/// The engine driving a context.
pub trait Engine {
    /// Notice of a backjump to `level`.
    fn backtrack_to_level(&mut self, level: LevelIndex);

    /// Notice of a backjump within the current level, to position `position` of the engine.
    fn backtrack_to_position(&mut self, position: usize);
}

/// A MIP solver, kept in step with the levels of a context.
pub trait Mip {
    fn backtrack(&mut self, level: LevelIndex);
}

/// A registry of the collaborators of a context.
#[derive(Default)]
pub struct Channels {
    variables: Vec<Box<dyn DomainVariable>>,
    propagators: Vec<Box<dyn Propagator>>,
    engine: Option<Box<dyn Engine>>,
    mip: Option<Box<dyn Mip>>,
}

impl Channels {
    /// Registers a variable, and returns the id of the variable.
    pub fn register_variable(&mut self, variable: Box<dyn DomainVariable>) -> VariableId {
        let id = self.variables.len() as VariableId;
        self.variables.push(variable);
        id
    }

    /// Registers a propagator, and returns the id of the propagator.
    pub fn register_propagator(&mut self, propagator: Box<dyn Propagator>) -> PropagatorId {
        let id = self.propagators.len() as PropagatorId;
        self.propagators.push(propagator);
        id
    }

    pub fn set_engine(&mut self, engine: Box<dyn Engine>) {
        self.engine = Some(engine);
    }

    pub fn set_mip(&mut self, mip: Box<dyn Mip>) {
        self.mip = Some(mip);
    }

    /// Tells the owner of `info` a literal with `polarity` on the atom of `info` is true.
    ///
    /// Only variables are told, as propagators learn of literals through tokens.
    pub fn channel(&mut self, info: &ChannelInfo, polarity: bool) {
        if let Owner::Variable(id) = info.owner {
            log::trace!(target: targets::CHANNEL, "Variable {id}: {:?} {} as {polarity}", info.value_type, info.value);
            match self.variables.get_mut(id as usize) {
                Some(variable) => variable.channel(info.value, info.value_type, polarity),
                None => log::warn!(target: targets::CHANNEL, "Unregistered variable {id}"),
            }
        }
    }

    /// Forwards a wake-up token to the propagator `id`.
    pub fn wakeup(&mut self, id: PropagatorId, data: u32, event: u32) {
        match self.propagators.get_mut(id as usize) {
            Some(propagator) => propagator.wakeup(data, event),
            None => log::warn!(target: targets::CHANNEL, "Unregistered propagator {id}"),
        }
    }

    /// Tells the owner of `info` the lazy atom of `info` has been released.
    pub fn free_lazy_var(&mut self, info: &ChannelInfo) {
        match info.owner {
            Owner::None => {}

            Owner::Variable(id) => {
                if let Some(variable) = self.variables.get_mut(id as usize) {
                    variable.free_lazy_var(info.value);
                }
            }

            Owner::Propagator(id) => {
                if let Some(propagator) = self.propagators.get_mut(id as usize) {
                    propagator.free_lazy_var(info.value);
                }
            }
        }
    }

    /// Tells every collaborator of a backjump to `level`.
    pub fn backtrack_to_level(&mut self, level: LevelIndex) {
        for variable in self.variables.iter_mut() {
            variable.backtrack(level);
        }
        for propagator in self.propagators.iter_mut() {
            propagator.backtrack(level);
        }
        if let Some(engine) = self.engine.as_mut() {
            engine.backtrack_to_level(level);
        }
        if let Some(mip) = self.mip.as_mut() {
            mip.backtrack(level);
        }
    }

    /// Tells the engine of a backjump within the current level.
    pub fn backtrack_to_position(&mut self, position: usize) {
        if let Some(engine) = self.engine.as_mut() {
            engine.backtrack_to_position(position);
        }
    }
}
