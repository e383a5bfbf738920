//! Declaration inputs with known results.

/// Six entities with shared and undeclared dependencies.
///
/// Resolves to:
///
/// ```text
/// A depends on B C E F G H
/// B depends on C E F G H
/// C depends on G
/// D depends on A B C E F G H
/// E depends on F H
/// F depends on H
/// ```
pub const BASIC: &str = "A depends on B C
B depends on C E
C depends on G  
D depends on A F   
E depends on F
F depends on H";

/// Two interleaved binary chains, 23 declarations deep.
pub const LONG_CHAIN: &str = "A depends on B C
B depends on D E
C depends on F
D depends on G
E depends on H
F depends on I
G depends on J
H depends on K
I depends on L
J depends on M
K depends on N
L depends on O
M depends on P
N depends on Q
O depends on R
P depends on S
Q depends on T
R depends on U
S depends on V
T depends on W
U depends on X
V depends on Y
W depends on Z";

/// A three-entity cycle feeding a tail, plus self-loops.
pub const CYCLES: &str = "A depends on B
B depends on C
C depends on A D
D depends on E D
E depends on 
S depends on S";

/// Same entity declared twice, duplicated tokens and undeclared leaves.
pub const REDECLARED: &str = "lib_a depends on lib_b lib_b
lib_b depends on $ext
lib_a depends on lib_c
lib_c depends on lib_b lib_a";

/// Every fixture above.
pub const ALL: &[&str] = &[BASIC, LONG_CHAIN, CYCLES, REDECLARED, "", "A depends on "];
