/// Built-in cursive stroke ("hello") used when no literal or external path is supplied.
pub const DEFAULT_PATH: &str = "M10 60 C20 40 30 10 40 10 C50 10 45 40 35 60 \
C30 70 30 75 40 70 C55 60 60 45 70 45 C80 45 75 60 65 60 C60 60 60 70 70 70 \
C85 70 95 40 100 20 C103 8 95 5 92 20 C88 40 88 70 100 70 \
C115 70 120 40 125 20 C128 8 120 5 117 20 C113 40 113 70 125 70 \
C135 70 140 50 150 50 C160 50 165 60 160 68 C155 75 145 72 143 62 \
C141 52 150 48 160 52 C168 55 175 55 185 45";
