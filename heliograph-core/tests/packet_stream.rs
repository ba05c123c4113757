//! Property tests for the receive-side packet assembly
//!
//! The commander link has no framing: the assembler must turn any byte
//! stream into consecutive 4-byte packets with the cursor never leaving
//! its range.

use heliograph_core::{PacketAssembler, PACKET_LEN};
use proptest::prelude::*;

proptest! {
    #[test]
    fn cursor_always_in_range(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut asm = PacketAssembler::new();
        for b in bytes {
            asm.accept(b);
            prop_assert!(asm.cursor() < PACKET_LEN);
        }
    }

    #[test]
    fn packets_are_consecutive_chunks(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut asm = PacketAssembler::new();
        let mut packets = Vec::new();
        for &b in &bytes {
            if let Some(p) = asm.accept(b) {
                packets.push(p);
            }
        }

        // One packet per full 4-byte chunk, each equal to its chunk
        prop_assert_eq!(packets.len(), bytes.len() / PACKET_LEN);
        for (packet, chunk) in packets.iter().zip(bytes.chunks_exact(PACKET_LEN)) {
            prop_assert_eq!(&packet.as_bytes()[..], chunk);
        }

        // Leftover bytes are exactly the cursor position
        prop_assert_eq!(asm.cursor(), bytes.len() % PACKET_LEN);
    }
}
