/*!
# Operations and Registers

Operation names are not case sensitive; `MOVP`, `movp` and `MovP` are the
same operation. Every parameter that expects a number also accepts a
register (`$w`) or a variable (`$.x`) holding one.

## Registers

| Register | Holds |
|----------|-------|
| `$ret` | value of the last `ret` or native `call` |
| `$add` `$sub` `$mul` `$div` `$mod` `$pow` | result of the operation of the same name |
| `$and` `$or` `$xor` | result of the bitwise operation of the same name |
| `$cmp` | flags from the last `cmp` |
| `$w` `$h` | width and height of the canvas |
| `$pi` `$deg2rad` `$rad2deg` | constants |

## Variables

| Operation | Effect |
|-----------|--------|
| `set $.name value` | create or overwrite a variable |
| `del $.name` | remove a variable |
| `adds $.name n` ... `xors $.name n` | apply the operator to the variable in place |

Variable names always start with `$.`.

## Arithmetic

`add`, `sub`, `mul`, `div`, `mod` and `pow` take two numbers. The bitwise
operations `and`, `or` and `xor` work on 32-bit integers.

## Comparison

`cmp a b` sets `$cmp` to a combination of four bits:

| Bit | Meaning |
|-----|---------|
| `1000` | equal |
| `0100` | not equal |
| `0010` | greater |
| `0001` | lesser |

A value that is not a number compares as not equal and neither greater
nor lesser. The conditional operations test these bits:

| Suffix | Condition |
|--------|-----------|
| `e` | equal |
| `ne` | not equal |
| `g` | greater |
| `ge` | greater or equal |
| `l` | lesser |
| `le` | lesser or equal |

`c` plus a suffix calls a function when the condition holds (`cge f`),
`s` plus a suffix sets a variable (`sl $.min 0`).

## Functions

| Operation | Effect |
|-----------|--------|
| `func name [arg...]` | record the following lines up to `func end` |
| `call name [arg...]` | run a function |
| `ret value` | put a value in `$ret` and leave the function |

Built-in functions: `sin`, `cos`, `tan`, `log` (base 10), `sqrt`, `rand`,
`nprint`.

## Output

`print` shows its arguments, resolving numbers, registers and variables.
`dump` (or `dmp`) lists every register.

## Drawing

| Operation | Effect |
|-----------|--------|
| `path begin` / `path close` | start a new path / close the current one |
| `movp x y` | move the pen |
| `line x y` | draw a line to the point |
| `strk` / `fill` | stroke or fill the current path |
| `lwid w` | line width |
| `rgba line\|fill name` | stroke or fill color by name |
| `rgba line\|fill r g b a` | color from 0-255 channels and 0-1 alpha |

*/
