//! Libraries for reading/writing A3 / Agonyl data files.
//!
//! ## Quest Files
//!
//! agonyl-quest reads and writes quest files: a fixed header, seven objective blocks with
//! optional names, and three continuation links. Reading checks every objective type and name
//! length, and rejects truncated files and files with trailing data. Writing reproduces the input
//! byte for byte, including padding the library does not interpret.
//!
//! ```rust
//! use agonyl::{Objective, ObjectiveType, QuestFile};
//!
//! let mut quest = QuestFile::default();
//! quest.objectives = std::array::from_fn(|_| Objective::unused());
//! quest.header.set_quest_id(12);
//! quest.header.set_min_level(5);
//! quest.header.set_max_level(10);
//! quest.objectives[0].set_objective_type(ObjectiveType::Find);
//! quest.objectives[0].set_name(&b"Old Letter"[..]).unwrap();
//! quest.continuation.set(0, Some(13));
//!
//! let bytes = quest.to_bytes().unwrap();
//! let read = QuestFile::from_bytes(&bytes).unwrap();
//! assert_eq!(read, quest);
//! assert_eq!(read.active_objectives().count(), 1);
//! ```
//!
//! ## Bin Files
//!
//! agonyl-bin reads and writes the flat record files: client map and monster bins, server NPC
//! files and spawn lists. Unknown fields are kept so files can be written back unchanged.
//!
//! ## Packet Cipher
//!
//! agonyl-crypto implements the stream cipher of the version 562 client.
//!
//! ```rust
//! use agonyl::crypto::{Crypto, Crypto562};
//!
//! let crypto = Crypto562::new(0x1234);
//! let mut packet = vec![0u8; 16];
//! crypto.encrypt_in_place(&mut packet);
//! crypto.decrypt_in_place(&mut packet);
//! assert_eq!(packet, vec![0u8; 16]);
//! ```
//!
//! ## Network Messages
//!
//! agonyl-protocol holds the fixed-layout messages of the login, gate and zone servers.
//!
//! ```rust
//! use agonyl::protocol::{chat::{C2SSay, SayType}, Message};
//!
//! let say = C2SSay::new(1, 0x1801, SayType::PARTY, "Hero", "Ready").unwrap();
//! let bytes = say.to_bytes().unwrap();
//! assert_eq!(bytes.len(), 98);
//! assert_eq!(C2SSay::from_bytes(&bytes).unwrap().words().unwrap(), "Ready");
//! ```
//!
//! ## Display Names
//!
//! ```rust
//! assert_eq!(agonyl::class_name(2), "Mage");
//! assert_eq!(agonyl::nation_name(1), "Quanato");
//! ```

#![deny(future_incompatible)]
#![deny(nonstandard_style)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused)]

pub use agonyl_bin as bin;
pub use agonyl_crypto as crypto;
pub use agonyl_protocol as protocol;
pub use agonyl_quest as quest;

pub use agonyl_bin::{MapBin, MonsterBin, NpcFile, SpawnList};
pub use agonyl_crypto::{Crypto, Crypto562};
pub use agonyl_quest::{Continuation, Objective, ObjectiveType, QuestFile, QuestHeader};
pub use agonyl_support::{class_name, nation_name};
