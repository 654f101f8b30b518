/// Player attribute blocks, 0-100 scale. Every player carries the full set;
/// position-specific generation ranges decide which fields land in the upper
/// bands.
#[derive(Debug, Clone, Default)]
pub struct Physical {
    pub pace: u8,
    pub strength: u8,
    pub stamina: u8,
}

#[derive(Debug, Clone, Default)]
pub struct Technical {
    pub diving: u8,
    pub handling: u8,
    pub kicking: u8,
    pub reflexes: u8,
    pub positioning: u8,
    pub tackling: u8,
    pub marking: u8,
    pub heading: u8,
    pub passing: u8,
    pub ball_control: u8,
    pub dribbling: u8,
    pub shooting: u8,
    pub finishing: u8,
}

#[derive(Debug, Clone, Default)]
pub struct Mental {
    pub concentration: u8,
    pub decision_making: u8,
    pub leadership: u8,
    pub positioning: u8,
    pub vision: u8,
    pub work_rate: u8,
    pub composure: u8,
}

#[derive(Debug, Clone, Default)]
pub struct PlayerAttributes {
    pub physical: Physical,
    pub technical: Technical,
    pub mental: Mental,
}
