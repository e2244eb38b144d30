use quickcheck::{Arbitrary, Gen};

use crate::{Move, Orientation, Position};

impl Arbitrary for Position {
    fn arbitrary(g: &mut Gen) -> Self {
        Position {
            x: (u8::arbitrary(g) % 9) as i8 + 1,
            y: (u8::arbitrary(g) % 9) as i8 + 1,
        }
    }
}

impl Arbitrary for Orientation {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Orientation::Horizontal, Orientation::Vertical])
            .unwrap()
    }
}

impl Arbitrary for Move {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Move::Advance {
                to: Position::arbitrary(g),
            }
        } else {
            Move::PlaceWall {
                position: Position::arbitrary(g),
                orientation: Orientation::arbitrary(g),
            }
        }
    }
}

/// A random stream of (player, action) pairs to drive a game with.
///
/// Player numbers are occasionally invalid and most actions are illegal;
/// the properties that consume this feed every action into the validating
/// operations and only assert on the state left behind.
#[derive(Clone, Debug)]
pub(crate) struct ActionSequence(pub Vec<(u8, Move)>);

impl Arbitrary for ActionSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 40;
        let mut actions = Vec::with_capacity(len);
        for _ in 0..len {
            let player = *g.choose(&[1u8, 1, 2, 2, 3]).unwrap();
            actions.push((player, Move::arbitrary(g)));
        }
        ActionSequence(actions)
    }
}
