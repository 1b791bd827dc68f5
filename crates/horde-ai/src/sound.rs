//! Sound propagation: flood a noise out from its source sector, waking
//! shootable actors it reaches.

use horde_core::map::SectorId;

use crate::world::{ActorId, AiWorld};

/// Alert every shootable actor within earshot of `source`, recursively
/// flooding through open two-sided lines starting at `origin_sector`.
pub fn noise_alert(world: &mut AiWorld, source: ActorId, origin_sector: SectorId) {
    let target_bits = source.to_bits().get();
    let validcount = world.next_validcount();
    recursive_sound(world, origin_sector, 0, validcount, target_bits);
}

/// Floods through every line with a passable height opening. Ordinary
/// open lines propagate with no hop limit at all; a line crossing whose
/// `blocks_sound` is set only propagates once — a second such crossing
/// on any branch stops the flood there.
fn recursive_sound(world: &mut AiWorld, sector_id: SectorId, soundblocks: u8, validcount: i32, target_bits: u64) {
    {
        let sector = world.sector_mut(sector_id);
        if sector.validcount == validcount && sector.sound_traversed <= soundblocks + 1 {
            // Already flooded by an equally short or shorter path.
            return;
        }
        sector.validcount = validcount;
        sector.sound_traversed = soundblocks + 1;
        sector.sound_target = Some(target_bits);
    }

    let line_count = world.sector(sector_id).lines.len();
    for i in 0..line_count {
        let line_id = world.sector(sector_id).lines[i];
        let line = world.line(line_id);
        let Some(back_id) = line.back_sector else { continue };
        let front_id = line.front_sector;
        let blocks_sound = line.blocks_sound;
        let other = if back_id.0 == sector_id.0 { front_id } else { back_id };

        let top = world.sector(front_id).ceiling_height.min(world.sector(back_id).ceiling_height);
        let bottom = world.sector(front_id).floor_height.max(world.sector(back_id).floor_height);
        if (top - bottom).0 <= 0 {
            continue; // closed door
        }

        if !blocks_sound {
            recursive_sound(world, other, soundblocks, validcount, target_bits);
        } else if soundblocks == 0 {
            recursive_sound(world, other, 1, validcount, target_bits);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::fixed::Fixed;
    use horde_core::map::{Line, LineId, Sector};

    fn two_room_world() -> (AiWorld, ActorId) {
        let mut world = AiWorld::new(1);
        let s0 = Sector::new(Fixed::ZERO, Fixed::from_int(128));
        let s1 = Sector::new(Fixed::ZERO, Fixed::from_int(128));
        world.sectors.push(s0);
        world.sectors.push(s1);
        world.lines.push(Line {
            front_sector: SectorId(0),
            back_sector: Some(SectorId(1)),
            blocks_sound: false,
            special_tag: None,
        });
        world.sectors[0].lines.push(LineId(0));
        world.sectors[1].lines.push(LineId(0));

        let actor = crate::world::Actor::spawn(
            horde_core::archetype::MonsterKind::ZombieMan,
            Fixed::ZERO,
            Fixed::ZERO,
            Fixed::ZERO,
            SectorId(0),
            20,
        );
        let id = world.spawn_actor(actor);
        (world, id)
    }

    #[test]
    fn noise_floods_into_adjacent_open_sector() {
        let (mut world, source) = two_room_world();
        noise_alert(&mut world, source, SectorId(0));
        assert!(world.sector(SectorId(1)).sound_target.is_some());
    }

    #[test]
    fn noise_still_crosses_a_single_sound_blocked_line() {
        let (mut world, source) = two_room_world();
        world.lines[0].blocks_sound = true;
        noise_alert(&mut world, source, SectorId(0));
        assert!(world.sector(SectorId(1)).sound_target.is_some());
    }

    #[test]
    fn noise_stops_after_a_second_sound_blocked_crossing() {
        // Three rooms in a row, both connecting lines sound-blocked: the
        // flood survives the first crossing (soundblocks 0 -> 1) but the
        // second one (soundblocks already 1) stops it cold.
        let mut world = AiWorld::new(1);
        for _ in 0..3 {
            world.sectors.push(Sector::new(Fixed::ZERO, Fixed::from_int(128)));
        }
        world.lines.push(Line { front_sector: SectorId(0), back_sector: Some(SectorId(1)), blocks_sound: true, special_tag: None });
        world.lines.push(Line { front_sector: SectorId(1), back_sector: Some(SectorId(2)), blocks_sound: true, special_tag: None });
        world.sectors[0].lines.push(LineId(0));
        world.sectors[1].lines.push(LineId(0));
        world.sectors[1].lines.push(LineId(1));
        world.sectors[2].lines.push(LineId(1));

        let actor = crate::world::Actor::spawn(
            horde_core::archetype::MonsterKind::ZombieMan,
            Fixed::ZERO,
            Fixed::ZERO,
            Fixed::ZERO,
            SectorId(0),
            20,
        );
        let source = world.spawn_actor(actor);

        noise_alert(&mut world, source, SectorId(0));
        assert!(world.sector(SectorId(1)).sound_target.is_some());
        assert!(world.sector(SectorId(2)).sound_target.is_none());
    }
}
