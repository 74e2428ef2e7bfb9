/// Logical actions a host maps its keys onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Back,
    RotateLeft,
    RotateRight,
    Fire,
    Interact,
    NextWeapon,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Forward,
        Action::Back,
        Action::RotateLeft,
        Action::RotateRight,
        Action::Fire,
        Action::Interact,
        Action::NextWeapon,
    ];
}

/// Held-key state sampled once per tick. Presses shorter than a tick collapse into "held".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub fire: bool,
    pub interact: bool,
    pub next_weapon: bool,
}

impl InputState {
    pub fn set(&mut self, action: Action, held: bool) {
        *self.slot(action) = held;
    }

    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::Forward => self.forward,
            Action::Back => self.back,
            Action::RotateLeft => self.rotate_left,
            Action::RotateRight => self.rotate_right,
            Action::Fire => self.fire,
            Action::Interact => self.interact,
            Action::NextWeapon => self.next_weapon,
        }
    }

    pub fn with(mut self, action: Action) -> Self {
        self.set(action, true);
        self
    }

    /// Net movement direction: +1 forward, -1 back, 0 when both or neither are held.
    pub fn move_axis(&self) -> f64 {
        f64::from(i8::from(self.forward) - i8::from(self.back))
    }

    /// Net turn direction: +1 right, -1 left.
    pub fn turn_axis(&self) -> f64 {
        f64::from(i8::from(self.rotate_right) - i8::from(self.rotate_left))
    }

    fn slot(&mut self, action: Action) -> &mut bool {
        match action {
            Action::Forward => &mut self.forward,
            Action::Back => &mut self.back,
            Action::RotateLeft => &mut self.rotate_left,
            Action::RotateRight => &mut self.rotate_right,
            Action::Fire => &mut self.fire,
            Action::Interact => &mut self.interact,
            Action::NextWeapon => &mut self.next_weapon,
        }
    }
}
