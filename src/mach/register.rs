use std::f64::consts::PI;

/// ## Well-known registers
///
/// Registers always exist. Handlers overwrite them in place; the constants
/// are never written after construction.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    Ret,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    And,
    Or,
    Xor,
    Cmp,
    W,
    H,
    Pi,
    Deg2Rad,
    Rad2Deg,
}

impl Register {
    pub const ALL: [Register; 16] = [
        Register::Ret,
        Register::Add,
        Register::Sub,
        Register::Mul,
        Register::Div,
        Register::Mod,
        Register::Pow,
        Register::And,
        Register::Or,
        Register::Xor,
        Register::Cmp,
        Register::W,
        Register::H,
        Register::Pi,
        Register::Deg2Rad,
        Register::Rad2Deg,
    ];

    pub fn name(self) -> &'static str {
        use Register::*;
        match self {
            Ret => "$ret",
            Add => "$add",
            Sub => "$sub",
            Mul => "$mul",
            Div => "$div",
            Mod => "$mod",
            Pow => "$pow",
            And => "$and",
            Or => "$or",
            Xor => "$xor",
            Cmp => "$cmp",
            W => "$w",
            H => "$h",
            Pi => "$pi",
            Deg2Rad => "$deg2rad",
            Rad2Deg => "$rad2deg",
        }
    }

    pub fn from_name(name: &str) -> Option<Register> {
        Register::ALL.iter().copied().find(|r| r.name() == name)
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Registers {
    values: [f64; Register::ALL.len()],
}

impl Registers {
    pub fn new(width: f64, height: f64) -> Registers {
        let mut registers = Registers {
            values: [0.0; Register::ALL.len()],
        };
        registers.set(Register::W, width);
        registers.set(Register::H, height);
        registers.set(Register::Pi, PI);
        registers.set(Register::Deg2Rad, PI / 180.0);
        registers.set(Register::Rad2Deg, 180.0 / PI);
        registers
    }

    pub fn get(&self, register: Register) -> f64 {
        self.values[register as usize]
    }

    pub fn set(&mut self, register: Register, value: f64) {
        self.values[register as usize] = value;
    }

    pub fn cmp(&self) -> CmpFlags {
        CmpFlags::from_bits(self.get(Register::Cmp) as u8)
    }

    pub fn set_cmp(&mut self, flags: CmpFlags) {
        self.set(Register::Cmp, flags.bits() as f64);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Register, f64)> + '_ {
        Register::ALL.iter().map(move |&r| (r, self.get(r)))
    }
}

/// ## The four `$cmp` bits

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CmpFlags(u8);

impl CmpFlags {
    pub const EQUAL: CmpFlags = CmpFlags(0b1000);
    pub const NOT_EQUAL: CmpFlags = CmpFlags(0b0100);
    pub const GREATER: CmpFlags = CmpFlags(0b0010);
    pub const LESSER: CmpFlags = CmpFlags(0b0001);
    pub const GREATER_EQUAL: CmpFlags = CmpFlags(0b1010);
    pub const LESSER_EQUAL: CmpFlags = CmpFlags(0b1001);

    pub fn from_bits(bits: u8) -> CmpFlags {
        CmpFlags(bits & 0b1111)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Neither ordering bit is set for NaN, and only `NOT_EQUAL` of the
    /// equality pair.
    pub fn compare(a: f64, b: f64) -> CmpFlags {
        let mut flags = CmpFlags::default();
        if a > b {
            flags = flags | CmpFlags::GREATER;
        } else if a < b {
            flags = flags | CmpFlags::LESSER;
        }
        if a == b {
            flags = flags | CmpFlags::EQUAL;
        } else {
            flags = flags | CmpFlags::NOT_EQUAL;
        }
        flags
    }

    pub fn intersects(self, mask: CmpFlags) -> bool {
        self.0 & mask.0 != 0
    }
}

impl std::ops::BitOr for CmpFlags {
    type Output = CmpFlags;
    fn bitor(self, rhs: CmpFlags) -> CmpFlags {
        CmpFlags(self.0 | rhs.0)
    }
}

impl std::fmt::Display for CmpFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare() {
        assert_eq!(CmpFlags::compare(3.0, 5.0).bits(), 0b0101);
        assert_eq!(CmpFlags::compare(5.0, 3.0).bits(), 0b0110);
        assert_eq!(CmpFlags::compare(4.0, 4.0).bits(), 0b1000);
        assert_eq!(CmpFlags::compare(f64::NAN, 4.0).bits(), 0b0100);
    }

    #[test]
    fn test_compound_masks() {
        let ge = CmpFlags::compare(4.0, 4.0);
        assert!(ge.intersects(CmpFlags::GREATER_EQUAL));
        assert!(ge.intersects(CmpFlags::LESSER_EQUAL));
        assert!(!ge.intersects(CmpFlags::GREATER));
        assert_eq!(CmpFlags::GREATER_EQUAL, CmpFlags::GREATER | CmpFlags::EQUAL);
        assert_eq!(CmpFlags::LESSER_EQUAL, CmpFlags::LESSER | CmpFlags::EQUAL);
    }

    #[test]
    fn test_registers() {
        let registers = Registers::new(640.0, 480.0);
        assert_eq!(registers.get(Register::W), 640.0);
        assert_eq!(registers.get(Register::Rad2Deg), 180.0 / PI);
        assert_eq!(Register::from_name("$deg2rad"), Some(Register::Deg2Rad));
        assert_eq!(Register::from_name("$.deg2rad"), None);
        assert_eq!(registers.cmp().to_string(), "0000");
    }
}
